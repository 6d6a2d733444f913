//! Like endpoint client.

use crate::core::like::settle_like_response;
use crate::core::post::PostId;
use crate::error::LikeError;
use gloo_net::http::Request;
use pakapaka_api_models::{LikeResponse, like_post_path};

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    endpoint: String,
    strict_status: bool,
}

impl ApiClient {
    pub(crate) fn new(endpoint: impl Into<String>, strict_status: bool) -> Self {
        Self {
            endpoint: endpoint.into(),
            strict_status,
        }
    }

    /// Toggle the current user's like on `post_id`. The request has no body;
    /// the session cookie identifies the user.
    pub(crate) async fn toggle_like(&self, post_id: &PostId) -> Result<LikeResponse, LikeError> {
        let url = like_post_path(&self.endpoint, post_id.as_str());
        let response = Request::post(&url)
            .send()
            .await
            .map_err(|err| LikeError::Network(err.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|err| LikeError::Network(err.to_string()))?;
        settle_like_response(response.status(), &body, self.strict_status)
    }
}
