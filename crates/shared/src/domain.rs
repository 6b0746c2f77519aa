use serde::{Deserialize, Serialize};

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Post identifier. Corpus files may carry either string or numeric ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawPostId")]
pub struct PostId(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPostId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawPostId> for PostId {
    fn from(value: RawPostId) -> Self {
        match value {
            RawPostId::Text(text) => Self(text),
            RawPostId::Number(number) => Self(number.to_string()),
        }
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Display-only fields (author, date, read time...) carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Post {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        excerpt: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: PostId(id.into()),
            title: title.into(),
            excerpt: excerpt.into(),
            category: category.into(),
            image: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Display hint attached to categories and contact interests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryIcon {
    Brain,
    Target,
    Heart,
    Star,
    Filter,
}

impl CategoryIcon {
    /// Total lookup: unknown categories (and "All") fall back to `Filter`.
    pub fn for_category(category: &str) -> Self {
        match category {
            "Innovation" => Self::Brain,
            "Product Leadership" => Self::Target,
            "Team Building" => Self::Heart,
            "Personal Growth" => Self::Star,
            _ => Self::Filter,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brain => "brain",
            Self::Target => "target",
            Self::Heart => "heart",
            Self::Star => "star",
            Self::Filter => "filter",
        }
    }
}
