//! Post models

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::frontmatter::scalar_string;

/// Summary of a blog post, as listed on the blog index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    /// Post title
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,

    /// Short teaser shown on cards
    #[serde(default, deserialize_with = "scalar_string")]
    pub excerpt: String,

    #[serde(default, deserialize_with = "scalar_string")]
    pub author: String,

    /// Publication date, compared as a plain string (ISO `YYYY-MM-DD`)
    #[serde(default, deserialize_with = "scalar_string")]
    pub date: String,

    /// Display string such as "5 min read"
    #[serde(default, deserialize_with = "scalar_string")]
    pub read_time: String,

    #[serde(default, deserialize_with = "scalar_string")]
    pub category: String,

    /// Cover image URL or path
    #[serde(default, deserialize_with = "scalar_string")]
    pub image: String,

    /// URL identifier. Always the source file name without `.md`.
    #[serde(default, deserialize_with = "scalar_string")]
    pub slug: String,

    /// Any other front-matter fields, in header order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl PostMetadata {
    /// Replace whatever slug the header carried with the canonical one
    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug = slug.to_string();
        self
    }
}

/// A single post: metadata plus rendered HTML body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub metadata: PostMetadata,

    /// Rendered HTML. Not sanitized; callers inject it as-is.
    pub content: String,
}
