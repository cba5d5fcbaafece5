//! Comment fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::comment;

/// Default comment id.
pub const DEFAULT_ID: &str = "000000000000000000000001";

/// Default post id.
pub const DEFAULT_POST_ID: &str = "0000000000000000000000aa";

/// Default author id.
pub const DEFAULT_AUTHOR_ID: &str = "0000000000000000000000bb";

/// Default comment text.
pub const DEFAULT_TEXT: &str = "Test comment";

/// Creates a top-level comment entity model with default values.
///
/// # Returns
/// - `comment::Model` - In-memory comment entity
pub fn entity() -> comment::Model {
    entity_builder().build()
}

/// Creates a builder for a comment entity model.
pub fn entity_builder() -> CommentEntityBuilder {
    CommentEntityBuilder {
        id: DEFAULT_ID.to_string(),
        text: DEFAULT_TEXT.to_string(),
        author_id: DEFAULT_AUTHOR_ID.to_string(),
        post_id: DEFAULT_POST_ID.to_string(),
        parent_id: None,
        votes: 0,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

/// Builder for in-memory comment entity models.
pub struct CommentEntityBuilder {
    id: String,
    text: String,
    author_id: String,
    post_id: String,
    parent_id: Option<String>,
    votes: i32,
    created_at: DateTime<Utc>,
}

impl CommentEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn post_id(mut self, post_id: impl Into<String>) -> Self {
        self.post_id = post_id.into();
        self
    }

    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    pub fn build(self) -> comment::Model {
        comment::Model {
            id: self.id,
            text: self.text,
            author_id: self.author_id,
            post_id: self.post_id,
            parent_id: self.parent_id,
            votes: self.votes,
            created_at: self.created_at,
        }
    }
}
