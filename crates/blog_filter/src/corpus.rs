use std::{fs, path::Path};

use serde::Deserialize;
use shared::domain::{Post, ALL_CATEGORIES};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed corpus: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate post id '{0}'")]
    DuplicateId(String),
    #[error("post '{0}' uses the reserved category \"All\"")]
    ReservedCategory(String),
}

/// Read-only categories and posts supplied by the site content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Corpus {
    #[serde(default)]
    pub categories: Vec<String>,
    pub posts: Vec<Post>,
}

impl Corpus {
    pub fn from_json(raw: &str) -> Result<Self, CorpusError> {
        let corpus: Corpus = serde_json::from_str(raw)?;
        corpus.check()?;
        Ok(corpus)
    }

    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let raw = fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let corpus = Self::from_json(&raw)?;
        debug!(
            path = %path.display(),
            posts = corpus.posts.len(),
            categories = corpus.categories.len(),
            "loaded blog corpus"
        );
        Ok(corpus)
    }

    fn check(&self) -> Result<(), CorpusError> {
        let mut seen = std::collections::HashSet::new();
        for post in &self.posts {
            if !seen.insert(&post.id) {
                return Err(CorpusError::DuplicateId(post.id.to_string()));
            }
            if post.category == ALL_CATEGORIES {
                return Err(CorpusError::ReservedCategory(post.id.to_string()));
            }
            if !self.categories.is_empty() && !self.categories.contains(&post.category) {
                warn!(post = %post.id, category = %post.category, "post category missing from category list");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const CORPUS: &str = r#"{
        "categories": ["Innovation", "Team Building"],
        "posts": [
            {"id": 1, "title": "A", "excerpt": "a", "category": "Innovation"},
            {"id": "two", "title": "B", "excerpt": "b", "category": "Team Building"}
        ]
    }"#;

    #[test]
    fn parses_mixed_id_kinds() {
        let corpus = Corpus::from_json(CORPUS).expect("corpus");
        assert_eq!(corpus.posts.len(), 2);
        assert_eq!(corpus.posts[0].id.0, "1");
        assert_eq!(corpus.posts[1].id.0, "two");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = r#"{"posts": [
            {"id": 1, "title": "A", "excerpt": "a", "category": "Innovation"},
            {"id": "1", "title": "B", "excerpt": "b", "category": "Innovation"}
        ]}"#;
        let err = Corpus::from_json(raw).expect_err("duplicate");
        assert!(matches!(err, CorpusError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn rejects_reserved_category() {
        let raw = r#"{"posts": [{"id": 1, "title": "A", "excerpt": "a", "category": "All"}]}"#;
        let err = Corpus::from_json(raw).expect_err("reserved");
        assert!(matches!(err, CorpusError::ReservedCategory(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(CORPUS.as_bytes()).expect("write corpus");
        let corpus = Corpus::load(file.path()).expect("load");
        assert_eq!(corpus.categories, vec!["Innovation", "Team Building"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Corpus::load(Path::new("/nonexistent/posts.json")).expect_err("missing");
        assert!(err.to_string().contains("/nonexistent/posts.json"));
    }
}
