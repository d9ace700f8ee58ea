//! Modal application state: passage view, link cursor, escape overlay.

use skein_core::{
    EscapeMenu, EscapeOutcome, Key, LinkCursor, Session, Story, Termination, Transition,
};

/// Player application state.
///
/// While the escape menu is open it owns every key; otherwise keys drive
/// the link cursor and the session. The frame is redrawn after every
/// event, so closing the overlay restores the passage view with the
/// cursor exactly where it was.
pub struct App {
    session: Session,
    cursor: LinkCursor,
    escape: Option<EscapeMenu>,
    outcome: Option<Termination>,
    /// Whether the main loop should stop.
    pub should_quit: bool,
}

impl App {
    /// Start the player at the story's entry passage.
    pub fn new(story: Story) -> Self {
        let session = Session::new(story);
        let cursor = LinkCursor::new(session.current().map_or(0, |p| p.links.len()));
        Self {
            session,
            cursor,
            escape: None,
            outcome: None,
            should_quit: false,
        }
    }

    /// The running session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Cursor over the current passage's links.
    pub fn cursor(&self) -> &LinkCursor {
        &self.cursor
    }

    /// The escape menu, while it is open.
    pub fn escape_menu(&self) -> Option<&EscapeMenu> {
        self.escape.as_ref()
    }

    /// How the run ended, once it has.
    pub fn outcome(&self) -> Option<&Termination> {
        self.outcome.as_ref()
    }

    /// Feed one logical key to whichever surface owns input.
    pub fn handle_key(&mut self, key: Key) {
        if let Some(menu) = &mut self.escape {
            if let Some(outcome) = menu.handle_key(key) {
                self.escape = None;
                if outcome == EscapeOutcome::Exit {
                    self.should_quit = true;
                }
            }
            return;
        }
        self.handle_play_key(key);
    }

    fn handle_play_key(&mut self, key: Key) {
        let ending = match self.session.current() {
            Some(passage) => passage.is_ending(),
            None => {
                self.should_quit = true;
                return;
            }
        };

        // "End Game" is showing; any key closes the run.
        if ending {
            let transition = self.session.finish();
            self.apply(transition);
            return;
        }

        match key {
            Key::Up => self.cursor.move_up(),
            Key::Down => self.cursor.move_down(),
            Key::Confirm => {
                let transition = self.session.choose(self.cursor.selected());
                self.apply(transition);
            }
            Key::Escape => self.escape = Some(EscapeMenu::new()),
            Key::Quit => {}
        }
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Continue(next) => {
                self.cursor = LinkCursor::new(self.session.story().get(next).links.len());
            }
            Transition::Terminate(termination) => {
                self.outcome = Some(termination);
                self.should_quit = true;
            }
        }
    }
}
