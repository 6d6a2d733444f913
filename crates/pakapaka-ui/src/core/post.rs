//! Post identifiers as the like controls carry them.

use std::fmt;
use thiserror::Error;

/// Reasons a post id cannot be taken from the markup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PostIdError {
    /// The id (or its final segment) was empty.
    #[error("post id is empty")]
    Empty,
    /// The id contains whitespace or a path separator.
    #[error("post id `{0}` contains a reserved character")]
    Reserved(String),
    /// The element id does not have the `<prefix>-<prefix>-<post id>` shape.
    #[error("element id `{0}` does not encode a post id")]
    Malformed(String),
}

/// Server-side post identifier, kept verbatim as rendered.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(String);

impl PostId {
    /// Validate a raw post id.
    ///
    /// # Errors
    /// Returns [`PostIdError::Empty`] for an empty string and
    /// [`PostIdError::Reserved`] when it contains whitespace or `/`.
    pub fn new(raw: &str) -> Result<Self, PostIdError> {
        if raw.is_empty() {
            return Err(PostIdError::Empty);
        }
        if raw.chars().any(|ch| ch.is_whitespace() || ch == '/') {
            return Err(PostIdError::Reserved(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Decode the post id from a like icon's element id.
    ///
    /// Templates render ids such as `like-button-42` or `fa-heart-icon-42`;
    /// the post id is the final `-` separated segment.
    ///
    /// # Errors
    /// Returns [`PostIdError::Malformed`] when the id has fewer than three
    /// segments, otherwise the errors of [`PostId::new`].
    pub fn from_element_id(element_id: &str) -> Result<Self, PostIdError> {
        if element_id.split('-').count() < 3 {
            return Err(PostIdError::Malformed(element_id.to_string()));
        }
        let last = element_id.rsplit('-').next().unwrap_or_default();
        Self::new(last)
    }

    /// Raw id as rendered by the server.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the counter element the templates render for this post.
    #[must_use]
    pub fn counter_id(&self) -> String {
        format!("number-of-likes-{}", self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
