//! Logical key alphabet and menu state machines.
//!
//! The engine never sees raw terminal key codes. The frontend maps
//! whatever its terminal library reports onto the five symbols here and
//! feeds them to the cursor and menu state machines.

/// A logical input symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move the selection up.
    Up,
    /// Move the selection down.
    Down,
    /// Commit the current selection.
    Confirm,
    /// Open the escape menu, or close it while it is open.
    Escape,
    /// Reserved force-close key; only the escape menu reacts to it.
    Quit,
}

/// Cursor over a passage's link list.
///
/// The cursor stays within `[0, len - 1]` for every key sequence. A
/// zero-link passage has no cursor; the caller shows its end-of-game
/// indicator instead of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkCursor {
    cursor: usize,
    len: usize,
}

impl LinkCursor {
    /// Create a cursor over `len` links, starting at the first.
    pub fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    /// Currently selected link index.
    pub fn selected(&self) -> usize {
        self.cursor
    }

    /// Number of links under the cursor.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no links to select.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move the selection down, clamped to the last link.
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
        }
    }

    /// Move the selection up, clamped to the first link.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}

/// The two escape-menu items, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeItem {
    /// Close the menu and resume play.
    Continue,
    /// End the program.
    Exit,
}

impl EscapeItem {
    /// Both items in display order.
    pub const ALL: [EscapeItem; 2] = [EscapeItem::Continue, EscapeItem::Exit];

    /// Display label for the menu row.
    pub fn label(self) -> &'static str {
        match self {
            EscapeItem::Continue => "Continue",
            EscapeItem::Exit => "Exit",
        }
    }
}

/// What the caller should do once the escape menu handled a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeOutcome {
    /// Close the overlay and resume play where it left off.
    Resume,
    /// Tear the terminal down and exit the program.
    Exit,
}

/// Modal Continue/Exit menu shown over the passage view.
///
/// Selection starts on `Continue` each time the menu opens.
#[derive(Debug, Clone, Copy)]
pub struct EscapeMenu {
    selected: EscapeItem,
}

impl EscapeMenu {
    /// Open the menu with `Continue` selected.
    pub fn new() -> Self {
        Self {
            selected: EscapeItem::Continue,
        }
    }

    /// Currently highlighted item.
    pub fn selected(&self) -> EscapeItem {
        self.selected
    }

    /// Feed one key; `Some` when the menu is done.
    ///
    /// Down and Up move between the two items without wrapping. Confirm
    /// commits the highlighted item. Escape closes the menu with no other
    /// effect, as does the reserved quit key.
    pub fn handle_key(&mut self, key: Key) -> Option<EscapeOutcome> {
        match key {
            Key::Down => {
                self.selected = EscapeItem::Exit;
                None
            }
            Key::Up => {
                self.selected = EscapeItem::Continue;
                None
            }
            Key::Confirm => Some(match self.selected {
                EscapeItem::Continue => EscapeOutcome::Resume,
                EscapeItem::Exit => EscapeOutcome::Exit,
            }),
            Key::Escape | Key::Quit => Some(EscapeOutcome::Resume),
        }
    }
}

impl Default for EscapeMenu {
    fn default() -> Self {
        Self::new()
    }
}
