//! Error types for binding behaviors and running like requests.

use crate::core::post::PostIdError;
use thiserror::Error;

/// A marker element could not be wired to its behavior.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// A required attribute is absent or empty.
    #[error("element is missing the `{attribute}` attribute")]
    MissingAttribute {
        /// Attribute that was expected.
        attribute: &'static str,
    },
    /// An attribute names an id that is not in the document.
    #[error("no element with id `{id}`")]
    UnknownElement {
        /// Id that failed to resolve.
        id: String,
    },
    /// The markup does not have the nesting the template normally renders.
    #[error("markup does not match the expected nesting: no {step}")]
    Structure {
        /// Navigation step that found no element.
        step: &'static str,
    },
    /// The like icon does not carry a usable post id.
    #[error(transparent)]
    PostId(#[from] PostIdError),
}

/// A like request did not produce a usable response.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LikeError {
    /// The request never completed (offline, CORS, aborted).
    #[error("like request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("like request rejected with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided reason when the body carried one.
        detail: Option<String>,
    },
    /// The body was not a like payload.
    #[error("like response could not be decoded: {0}")]
    Decode(String),
}

impl LikeError {
    /// Whether the user is told through the blocking alert. Decode failures
    /// only reach the console.
    #[must_use]
    pub const fn alerts(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. })
    }
}
