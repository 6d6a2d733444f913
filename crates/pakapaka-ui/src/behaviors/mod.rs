//! Click behaviors bound to server-rendered markup.
//!
//! # Design
//! - Each behavior binds its marker elements independently; an element that
//!   cannot be wired is skipped with a console warning and never affects the
//!   others.
//! - Every listener is owned by the returned [`UiBindings`]; dropping it (or
//!   calling [`UiBindings::dispose`]) detaches them all.

use crate::config::UiConfig;
use crate::core::markers::Behavior;
use crate::dom;
use crate::error::BindError;
use gloo::console;
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::Element;

pub mod burger;
pub mod card;
pub mod like;
pub mod notification;
pub mod password;

/// Listeners attached by [`init_ui_behaviors`].
#[derive(Default)]
pub struct UiBindings {
    listeners: Vec<EventListener>,
    skipped: usize,
}

impl UiBindings {
    /// Number of attached listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether nothing was bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Marker elements that matched a selector but could not be wired.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Detach every listener.
    pub fn dispose(self) {
        drop(self);
    }
}

/// Wire every behavior found under `root`.
#[must_use]
pub fn init_ui_behaviors(root: &Element, config: &UiConfig) -> UiBindings {
    let likes = Rc::new(like::LikeContext::new(config));
    let mut bindings = UiBindings::default();
    for behavior in Behavior::all() {
        for element in dom::query_all(root, behavior.selector()) {
            match bind_one(behavior, &element, &likes) {
                Ok(listener) => bindings.listeners.push(listener),
                Err(err) => {
                    bindings.skipped += 1;
                    console::warn!(
                        "behavior not bound",
                        behavior.name(),
                        err.to_string(),
                        element
                    );
                }
            }
        }
    }
    console::log!(
        "page behaviors bound",
        bindings.len().to_string(),
        "skipped",
        bindings.skipped.to_string()
    );
    bindings
}

fn bind_one(
    behavior: Behavior,
    element: &Element,
    likes: &Rc<like::LikeContext>,
) -> Result<EventListener, BindError> {
    match behavior {
        Behavior::Burger => burger::bind(element),
        Behavior::Notification => notification::bind(element),
        Behavior::Card => card::bind(element),
        Behavior::Like => like::bind(element, likes),
        Behavior::Password => password::bind(element),
    }
}
