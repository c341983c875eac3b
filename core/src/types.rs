//! Domain DTOs for the blog posts API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently of
//! the mock-server crate; integration tests catch drift between the two.
//! Post ids are opaque server tokens, so `PostId` wraps a `String` and is never
//! parsed or generated on the client.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single blog post returned by the API.
///
/// The backend keys the id as `_id`; a plain `id` is accepted when reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(rename = "_id", alias = "id")]
    pub id: PostId,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: PostId::new(id),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Request payload for creating a new post. Also the shape of the new-post
/// draft held by the controller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_reads_underscore_id() {
        let post: Post =
            serde_json::from_str(r#"{"_id":"65f0a1","title":"Hi","content":"There"}"#).unwrap();
        assert_eq!(post.id.as_str(), "65f0a1");
    }

    #[test]
    fn post_reads_plain_id() {
        let post: Post = serde_json::from_str(r#"{"id":"1","title":"Hi","content":"There"}"#).unwrap();
        assert_eq!(post, Post::new("1", "Hi", "There"));
    }

    #[test]
    fn post_writes_underscore_id() {
        let json = serde_json::to_value(Post::new("7", "T", "C")).unwrap();
        assert_eq!(json["_id"], "7");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn post_ignores_extra_backend_fields() {
        let post: Post = serde_json::from_str(
            r#"{"_id":"1","title":"T","content":"C","__v":0,"createdAt":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(post.title, "T");
    }

    #[test]
    fn post_id_displays_raw_token() {
        assert_eq!(PostId::from("abc/def").to_string(), "abc/def");
    }
}
