//! Like response handling: icon style, status policy and stale-response
//! suppression.
//!
//! # Design
//! - The server owns the count and liked flag; the page mirrors the last
//!   accepted response.
//! - Each click takes a per-post [`RequestToken`]; only the latest token for a
//!   post may update the page, so out-of-order responses cannot win.

use crate::core::post::PostId;
use crate::error::LikeError;
use pakapaka_api_models::{ErrorBody, LikeResponse};
use std::collections::HashMap;

/// Font Awesome style of the heart icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LikeStyle {
    /// Filled heart: the current user likes the post.
    Solid,
    /// Outlined heart.
    Regular,
}

impl LikeStyle {
    /// Style for a liked flag.
    #[must_use]
    pub const fn from_liked(liked: bool) -> Self {
        if liked { Self::Solid } else { Self::Regular }
    }

    /// Class applied for this style.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Solid => "fa-solid",
            Self::Regular => "fa-regular",
        }
    }

    /// Class this style replaces on the icon.
    #[must_use]
    pub const fn replaces(self) -> &'static str {
        match self {
            Self::Solid => "fa-regular",
            Self::Regular => "fa-solid",
        }
    }
}

/// DOM changes derived from a like response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeUpdate {
    /// Text written into the counter element.
    pub counter_text: String,
    /// Icon style to switch to.
    pub style: LikeStyle,
}

impl From<&LikeResponse> for LikeUpdate {
    fn from(response: &LikeResponse) -> Self {
        Self {
            counter_text: response.likes.to_string(),
            style: LikeStyle::from_liked(response.liked),
        }
    }
}

/// Interpret a finished like request.
///
/// With `strict_status` a non-2xx status is rejected before the body is read;
/// otherwise the body is parsed whatever the status, as older pages did.
///
/// # Errors
/// Returns [`LikeError::Status`] for a rejected status under `strict_status`
/// and [`LikeError::Decode`] when the body is not a like payload.
pub fn settle_like_response(
    status: u16,
    body: &str,
    strict_status: bool,
) -> Result<LikeResponse, LikeError> {
    if strict_status && !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|body| body.error);
        return Err(LikeError::Status { status, detail });
    }
    serde_json::from_str(body).map_err(|err| LikeError::Decode(err.to_string()))
}

/// Opaque marker for one like request on one post.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Latest request generation per post.
#[derive(Debug, Default)]
pub struct RequestLedger {
    latest: HashMap<PostId, u64>,
}

impl RequestLedger {
    /// Record a new request for `post` and return its token.
    pub fn begin(&mut self, post: &PostId) -> RequestToken {
        let generation = self.latest.entry(post.clone()).or_insert(0);
        *generation = generation.wrapping_add(1);
        RequestToken(*generation)
    }

    /// Whether `token` is still the most recent request for `post`.
    #[must_use]
    pub fn is_latest(&self, post: &PostId, token: RequestToken) -> bool {
        self.latest.get(post) == Some(&token.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(raw: &str) -> PostId {
        PostId::new(raw).expect("post id")
    }

    #[test]
    fn liked_response_turns_icon_solid() {
        let update = LikeUpdate::from(&LikeResponse {
            likes: 5,
            liked: true,
        });
        assert_eq!(update.counter_text, "5");
        assert_eq!(update.style.class(), "fa-solid");
        assert_eq!(update.style.replaces(), "fa-regular");
    }

    #[test]
    fn unliked_response_turns_icon_regular() {
        let update = LikeUpdate::from(&LikeResponse {
            likes: 4,
            liked: false,
        });
        assert_eq!(update.counter_text, "4");
        assert_eq!(update.style, LikeStyle::Regular);
        assert_eq!(update.style.replaces(), "fa-solid");
    }

    #[test]
    fn strict_status_rejects_before_parsing() {
        let body = r#"{"error": "該当する投稿は存在しません"}"#;
        let err = settle_like_response(400, body, true).expect_err("rejected");
        assert_eq!(
            err,
            LikeError::Status {
                status: 400,
                detail: Some("該当する投稿は存在しません".into())
            }
        );
        assert!(err.alerts());
    }

    #[test]
    fn strict_status_keeps_html_error_pages_opaque() {
        let err = settle_like_response(500, "<h1>Internal Server Error</h1>", true)
            .expect_err("rejected");
        assert_eq!(
            err,
            LikeError::Status {
                status: 500,
                detail: None
            }
        );
    }

    #[test]
    fn lenient_status_parses_whatever_arrives() {
        let ok = settle_like_response(500, r#"{"likes": 2, "liked": true}"#, false)
            .expect("parsed");
        assert_eq!(ok.likes, 2);

        let err = settle_like_response(302, "<html></html>", false).expect_err("decode");
        assert!(matches!(err, LikeError::Decode(_)));
        assert!(!err.alerts());
    }

    #[test]
    fn success_status_parses_payload() {
        let ok = settle_like_response(200, r#"{"likes": 5, "liked": true}"#, true).expect("ok");
        assert_eq!(
            ok,
            LikeResponse {
                likes: 5,
                liked: true
            }
        );
    }

    #[test]
    fn newer_request_supersedes_older_one() {
        let mut ledger = RequestLedger::default();
        let first = ledger.begin(&post("42"));
        let second = ledger.begin(&post("42"));
        assert!(!ledger.is_latest(&post("42"), first));
        assert!(ledger.is_latest(&post("42"), second));
    }

    #[test]
    fn tokens_are_tracked_per_post() {
        let mut ledger = RequestLedger::default();
        let a = ledger.begin(&post("1"));
        let b = ledger.begin(&post("2"));
        assert!(ledger.is_latest(&post("1"), a));
        assert!(ledger.is_latest(&post("2"), b));
        assert!(!ledger.is_latest(&post("3"), a));
    }
}
