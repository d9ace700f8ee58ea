//! Navigation over a loaded story.

use crate::story::{Passage, PassageId, Story};
use crate::wrap::wrap;

/// Why a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// The player acknowledged a passage with no outgoing links.
    Ending,
    /// A chosen link's target names no passage in the story.
    ///
    /// The player sees a plain end of the run, exactly like an authored
    /// ending, but the unresolved target is kept so tests and callers can
    /// tell a broken link apart.
    DanglingLink(String),
}

/// Result of advancing a session by one player action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Play continues at the given passage.
    Continue(PassageId),
    /// The run is over.
    Terminate(Termination),
}

/// Play state of a session. `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    /// The player is at the given passage.
    Playing(PassageId),
    /// The run is over.
    Terminated,
}

/// Resolve the link at `link_index` on `at` to the next transition.
///
/// Pure: identical inputs always yield the identical transition. The
/// caller guarantees `link_index` is within the passage's link list.
pub fn resolve(story: &Story, at: PassageId, link_index: usize) -> Transition {
    let target = &story.get(at).links[link_index].target;
    match story.find(target) {
        Some(next) => Transition::Continue(next),
        None => Transition::Terminate(Termination::DanglingLink(target.clone())),
    }
}

/// A single run through a story.
///
/// Owns the story; the play position is the only mutable state.
#[derive(Debug, Clone)]
pub struct Session {
    story: Story,
    state: PlayState,
}

impl Session {
    /// Start a session at the story's entry passage.
    pub fn new(story: Story) -> Self {
        let state = PlayState::Playing(story.entry());
        Self { story, state }
    }

    /// The story being played.
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// Current play state.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// The passage the player is at, while the session is live.
    pub fn current(&self) -> Option<&Passage> {
        match self.state {
            PlayState::Playing(id) => Some(self.story.get(id)),
            PlayState::Terminated => None,
        }
    }

    /// Lay out the current passage's prose at the given width.
    ///
    /// A terminated session renders nothing.
    pub fn render(&self, width: usize) -> Vec<String> {
        self.current()
            .map(|passage| wrap(&passage.content, width))
            .unwrap_or_default()
    }

    /// Follow the link at `link_index` on the current passage.
    ///
    /// Advances to the target passage when it resolves; otherwise the
    /// session terminates silently with the dangling target recorded.
    pub fn choose(&mut self, link_index: usize) -> Transition {
        let PlayState::Playing(at) = self.state else {
            return Transition::Terminate(Termination::Ending);
        };
        let transition = resolve(&self.story, at, link_index);
        self.state = match &transition {
            Transition::Continue(next) => PlayState::Playing(*next),
            Transition::Terminate(_) => PlayState::Terminated,
        };
        transition
    }

    /// Acknowledge an ending passage, closing the session.
    pub fn finish(&mut self) -> Transition {
        self.state = PlayState::Terminated;
        Transition::Terminate(Termination::Ending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::Link;

    fn story(passages: Vec<(&str, &str, Vec<(&str, &str)>)>) -> Story {
        let passages = passages
            .into_iter()
            .map(|(name, content, links)| Passage {
                name: name.into(),
                content: content.into(),
                links: links
                    .into_iter()
                    .map(|(option, target)| Link {
                        option: option.into(),
                        target: target.into(),
                    })
                    .collect(),
            })
            .collect();
        Story::build(passages).unwrap()
    }

    fn two_passage_story() -> Story {
        story(vec![
            ("Start", "Hi", vec![("Go", "End")]),
            ("End", "Bye", vec![]),
        ])
    }

    #[test]
    fn traversal_reaches_the_ending() {
        let mut session = Session::new(two_passage_story());
        assert_eq!(session.current().unwrap().name, "Start");

        let transition = session.choose(0);
        assert!(matches!(transition, Transition::Continue(_)));
        assert_eq!(session.current().unwrap().name, "End");
        assert!(session.current().unwrap().is_ending());

        let end = session.finish();
        assert_eq!(end, Transition::Terminate(Termination::Ending));
        assert_eq!(session.state(), PlayState::Terminated);
        assert!(session.current().is_none());
    }

    #[test]
    fn dangling_link_terminates_without_error() {
        let mut session = Session::new(story(vec![("Start", "Hi", vec![("Go", "Nowhere")])]));

        let transition = session.choose(0);
        assert_eq!(
            transition,
            Transition::Terminate(Termination::DanglingLink("Nowhere".into()))
        );
        assert_eq!(session.state(), PlayState::Terminated);
    }

    #[test]
    fn resolve_is_deterministic() {
        let story = two_passage_story();
        let first = resolve(&story, story.entry(), 0);
        let second = resolve(&story, story.entry(), 0);
        assert_eq!(first, second);
    }

    #[test]
    fn render_wraps_the_current_content() {
        let session = Session::new(story(vec![("Start", "abcdefghij klmno", vec![])]));
        assert_eq!(session.render(10), vec!["abcdefghij", "klmno"]);
    }

    #[test]
    fn terminated_session_renders_nothing() {
        let mut session = Session::new(two_passage_story());
        session.choose(0);
        session.finish();
        assert!(session.render(10).is_empty());
    }

    #[test]
    fn sequential_sessions_share_one_story() {
        let story = two_passage_story();
        let mut first = Session::new(story.clone());
        let mut second = Session::new(story);
        assert!(matches!(first.choose(0), Transition::Continue(_)));
        assert!(matches!(second.choose(0), Transition::Continue(_)));
    }
}
