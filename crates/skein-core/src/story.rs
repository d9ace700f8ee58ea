//! Passages, links, and the story graph.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{StoryError, StoryResult};

/// A named choice on a passage, pointing at another passage by name.
///
/// Links carry target *names* rather than references; they are resolved
/// against the story index only at traversal time.
#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    /// Display text for the choice.
    #[serde(rename = "Option")]
    pub option: String,
    /// Name of the passage this choice leads to.
    #[serde(rename = "Target")]
    pub target: String,
}

/// One narrative unit: prose plus its outgoing choices.
#[derive(Debug, Clone, Deserialize)]
pub struct Passage {
    /// Unique passage name.
    #[serde(rename = "PassageName")]
    pub name: String,
    /// Free-form prose shown to the player.
    #[serde(rename = "Content")]
    pub content: String,
    /// Outgoing choices in authored order. Empty marks an ending.
    #[serde(rename = "Links", default)]
    pub links: Vec<Link>,
}

impl Passage {
    /// Whether this passage is an ending (no outgoing links).
    pub fn is_ending(&self) -> bool {
        self.links.is_empty()
    }
}

/// Stable handle to a passage within its [`Story`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PassageId(usize);

/// The full set of passages and their links: the navigable world.
///
/// Owns every passage, built once at load time and read-only afterwards.
/// `Clone` so tests can run sequential sessions against one loaded graph.
#[derive(Debug, Clone)]
pub struct Story {
    passages: Vec<Passage>,
    by_name: HashMap<String, PassageId>,
}

impl Story {
    /// Build a story from decoded passage records.
    ///
    /// The first record becomes the entry point. Fails on an empty
    /// sequence and when two passages share a name.
    pub fn build(passages: Vec<Passage>) -> StoryResult<Self> {
        if passages.is_empty() {
            return Err(StoryError::Empty);
        }
        let mut by_name = HashMap::with_capacity(passages.len());
        for (i, passage) in passages.iter().enumerate() {
            if by_name.insert(passage.name.clone(), PassageId(i)).is_some() {
                return Err(StoryError::DuplicatePassage(passage.name.clone()));
            }
        }
        Ok(Self { passages, by_name })
    }

    /// Handle of the entry passage, the first in authored order.
    pub fn entry(&self) -> PassageId {
        PassageId(0)
    }

    /// Dereference a passage handle.
    pub fn get(&self, id: PassageId) -> &Passage {
        &self.passages[id.0]
    }

    /// Find a passage by name.
    ///
    /// `None` is not a defect at this level: a link may name a passage
    /// the author never wrote, which ends the run at traversal time.
    pub fn find(&self, name: &str) -> Option<PassageId> {
        self.by_name.get(name).copied()
    }

    /// Number of passages in the story.
    pub fn len(&self) -> usize {
        self.passages.len()
    }

    /// Whether the story holds no passages. Never true once built.
    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(name: &str, links: Vec<Link>) -> Passage {
        Passage {
            name: name.into(),
            content: format!("You are at {name}."),
            links,
        }
    }

    fn link(option: &str, target: &str) -> Link {
        Link {
            option: option.into(),
            target: target.into(),
        }
    }

    #[test]
    fn build_indexes_every_passage() {
        let story = Story::build(vec![
            passage("Start", vec![link("Go", "End")]),
            passage("End", vec![]),
        ])
        .unwrap();

        assert_eq!(story.len(), 2);
        assert_eq!(story.get(story.entry()).name, "Start");
        let end = story.find("End").unwrap();
        assert_eq!(story.get(end).name, "End");
        assert!(story.get(end).is_ending());
    }

    #[test]
    fn unknown_names_are_not_found() {
        let story = Story::build(vec![passage("Start", vec![])]).unwrap();
        assert!(story.find("Nowhere").is_none());
    }

    #[test]
    fn lookup_is_exact_on_name() {
        let story = Story::build(vec![passage("Start", vec![]), passage("start", vec![])]).unwrap();
        assert_ne!(story.find("Start"), story.find("start"));
    }

    #[test]
    fn empty_story_rejected() {
        assert!(matches!(Story::build(Vec::new()), Err(StoryError::Empty)));
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = Story::build(vec![
            passage("Start", vec![]),
            passage("Middle", vec![]),
            passage("Start", vec![]),
        ]);
        assert!(matches!(result, Err(StoryError::DuplicatePassage(name)) if name == "Start"));
    }
}
