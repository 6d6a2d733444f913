//! Like icons backed by the server counter.

use crate::config::UiConfig;
use crate::core::like::{LikeUpdate, RequestLedger, RequestToken};
use crate::core::markers::{LIKES_TARGET_ATTR, POST_ID_ATTR};
use crate::core::post::PostId;
use crate::dom;
use crate::error::{BindError, LikeError};
use crate::i18n::TranslationBundle;
use crate::services::api::ApiClient;
use gloo::console;
use gloo::dialogs::alert;
use gloo::events::EventListener;
use pakapaka_api_models::LikeResponse;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

/// State shared by every like icon under one root.
pub(crate) struct LikeContext {
    client: ApiClient,
    ledger: RefCell<RequestLedger>,
    ignore_stale: bool,
    failure_message: String,
}

impl LikeContext {
    pub(crate) fn new(config: &UiConfig) -> Self {
        let bundle = TranslationBundle::new(config.locale);
        Self {
            client: ApiClient::new(config.like_endpoint.clone(), config.strict_status),
            ledger: RefCell::new(RequestLedger::default()),
            ignore_stale: config.ignore_stale,
            failure_message: bundle.text("like.failed", "エラーが発生しました"),
        }
    }

    fn begin(&self, post_id: &PostId) -> RequestToken {
        self.ledger.borrow_mut().begin(post_id)
    }

    async fn toggle(&self, target: &LikeTarget, token: RequestToken) {
        let outcome = self.client.toggle_like(&target.post_id).await;
        // A superseded request neither updates the page nor alerts.
        if self.ignore_stale && !self.ledger.borrow().is_latest(&target.post_id, token) {
            console::log!("stale like outcome dropped", target.post_id.to_string());
            return;
        }
        match outcome {
            Ok(response) => apply_like_response(&target.icon, &target.counter, &response),
            Err(err) => self.report(&target.post_id, &err),
        }
    }

    fn report(&self, post_id: &PostId, err: &LikeError) {
        console::error!("like request failed", post_id.to_string(), err.to_string());
        if err.alerts() {
            alert(&self.failure_message);
        }
    }
}

struct LikeTarget {
    icon: Element,
    counter: Element,
    post_id: PostId,
}

/// Post id of a like icon: `data-post-id` when present, otherwise decoded
/// from the icon's element id.
///
/// # Errors
/// Returns [`BindError::PostId`] when neither source yields a valid id.
pub fn resolve_post_id(icon: &Element) -> Result<PostId, BindError> {
    let post_id = match dom::attribute(icon, POST_ID_ATTR) {
        Some(raw) => PostId::new(&raw)?,
        None => PostId::from_element_id(&icon.id())?,
    };
    Ok(post_id)
}

/// Mirror a server response: counter text and heart style.
pub fn apply_like_response(icon: &Element, counter: &Element, response: &LikeResponse) {
    let update = LikeUpdate::from(response);
    counter.set_text_content(Some(&update.counter_text));
    dom::replace_class(icon, update.style.replaces(), update.style.class());
}

pub(crate) fn bind(icon: &Element, likes: &Rc<LikeContext>) -> Result<EventListener, BindError> {
    let post_id = resolve_post_id(icon)?;
    let counter_id =
        dom::attribute(icon, LIKES_TARGET_ATTR).unwrap_or_else(|| post_id.counter_id());
    let counter = dom::element_by_id(&counter_id)?;
    let target = Rc::new(LikeTarget {
        icon: icon.clone(),
        counter,
        post_id,
    });
    let likes = Rc::clone(likes);
    Ok(EventListener::new(icon, "click", move |_event| {
        let likes = Rc::clone(&likes);
        let target = Rc::clone(&target);
        let token = likes.begin(&target.post_id);
        spawn_local(async move {
            likes.toggle(&target, token).await;
        });
    }))
}
