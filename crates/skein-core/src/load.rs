//! Story loading from JSON files.
//!
//! A story file is a JSON array of passage objects with `PassageName`,
//! `Content`, and `Links` fields; each link carries `Option` and `Target`.
//! `Links` may be omitted for ending passages.

use std::fs;
use std::path::Path;

use crate::error::{StoryError, StoryResult};
use crate::story::{Passage, Story};

/// Load and validate a story from a JSON file.
///
/// Missing files, malformed JSON, a non-array root, and missing required
/// fields all surface as load errors carrying the file path; graph-level
/// validation (non-empty, unique passage names) happens after decoding.
pub fn load_story(path: &Path) -> StoryResult<Story> {
    let data = fs::read_to_string(path).map_err(|source| StoryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let passages: Vec<Passage> =
        serde_json::from_str(&data).map_err(|source| StoryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Story::build(passages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_story(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("story.json");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_a_story_from_disk() {
        let (_dir, path) = write_story(
            r#"[
                {
                    "PassageName": "Start",
                    "Content": "Hi",
                    "Links": [{ "Option": "Go", "Target": "End" }]
                },
                { "PassageName": "End", "Content": "Bye", "Links": [] }
            ]"#,
        );

        let story = load_story(&path).unwrap();
        assert_eq!(story.len(), 2);
        assert_eq!(story.get(story.entry()).links[0].target, "End");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nothing.json");

        let err = load_story(&path).unwrap_err();
        assert!(matches!(err, StoryError::Read { .. }));
        assert!(err.to_string().contains("nothing.json"));
    }

    #[test]
    fn root_must_be_a_sequence() {
        let (_dir, path) = write_story(r#"{ "PassageName": "Start" }"#);
        assert!(matches!(
            load_story(&path),
            Err(StoryError::Parse { .. })
        ));
    }

    #[test]
    fn missing_passage_field_is_a_parse_error() {
        let (_dir, path) = write_story(r#"[{ "PassageName": "Start" }]"#);
        let err = load_story(&path).unwrap_err();
        assert!(err.to_string().contains("Content"));
    }

    #[test]
    fn missing_link_field_is_a_parse_error() {
        let (_dir, path) = write_story(
            r#"[{ "PassageName": "Start", "Content": "Hi", "Links": [{ "Option": "Go" }] }]"#,
        );
        let err = load_story(&path).unwrap_err();
        assert!(err.to_string().contains("Target"));
    }

    #[test]
    fn links_may_be_omitted() {
        let (_dir, path) = write_story(r#"[{ "PassageName": "Start", "Content": "Hi" }]"#);
        let story = load_story(&path).unwrap();
        assert!(story.get(story.entry()).is_ending());
    }
}
