#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Pakapaka like endpoint.
//!
//! The server renders every page and owns the like counters; the browser only
//! ever sends an empty `POST` and mirrors the JSON it gets back. Keeping the
//! payload shapes here gives the page behaviors and any future server port a
//! single definition of the contract.

use serde::{Deserialize, Serialize};

/// Route prefix the server exposes for toggling a like.
pub const LIKE_POST_ENDPOINT: &str = "/like-post";

/// Body returned by `POST /like-post/{post_id}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikeResponse {
    /// Total number of likes on the post after the toggle.
    pub likes: u64,
    /// Whether the current user likes the post after the toggle.
    pub liked: bool,
}

/// Error body the server attaches to rejected like requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable (localized) reason.
    pub error: String,
}

/// Build the like path for `post_id` under `endpoint`.
///
/// A trailing `/` on the endpoint is ignored and the post id is
/// percent-encoded as a single path segment.
#[must_use]
pub fn like_post_path(endpoint: &str, post_id: &str) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        urlencoding::encode(post_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_path_joins_endpoint_and_id() {
        assert_eq!(like_post_path(LIKE_POST_ENDPOINT, "42"), "/like-post/42");
        assert_eq!(like_post_path("/api/like-post/", "7"), "/api/like-post/7");
    }

    #[test]
    fn like_path_encodes_the_segment() {
        assert_eq!(like_post_path("/like-post", "a b"), "/like-post/a%20b");
        assert_eq!(like_post_path("/like-post", "x/y"), "/like-post/x%2Fy");
    }

    #[test]
    fn like_response_decodes_server_payload() {
        let parsed: LikeResponse =
            serde_json::from_str(r#"{"likes": 5, "liked": true}"#).expect("decode");
        assert_eq!(
            parsed,
            LikeResponse {
                likes: 5,
                liked: true
            }
        );
    }

    #[test]
    fn like_response_tolerates_extra_keys() {
        let parsed: LikeResponse =
            serde_json::from_str(r#"{"likes": 0, "liked": false, "post": 3}"#).expect("decode");
        assert_eq!(parsed.likes, 0);
        assert!(!parsed.liked);
    }

    #[test]
    fn like_response_rejects_error_body() {
        let parsed = serde_json::from_str::<LikeResponse>(r#"{"error": "missing"}"#);
        assert!(parsed.is_err());
        let body: ErrorBody = serde_json::from_str(r#"{"error": "missing"}"#).expect("decode");
        assert_eq!(body.error, "missing");
    }
}
