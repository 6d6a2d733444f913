//! Mobile navigation burger.

use crate::core::markers::{ACTIVE_CLASS, BURGER_TARGET_ATTR};
use crate::dom;
use crate::error::BindError;
use gloo::events::EventListener;
use web_sys::Element;

/// Flip `is-active` on the burger and the menu named by its `data-target`.
///
/// Both elements flip independently, so a pair rendered out of sync stays
/// out of sync.
///
/// # Errors
/// Returns [`BindError`] when `data-target` is missing or names no element.
pub fn bind(burger: &Element) -> Result<EventListener, BindError> {
    let target = dom::attribute(burger, BURGER_TARGET_ATTR).ok_or(BindError::MissingAttribute {
        attribute: BURGER_TARGET_ATTR,
    })?;
    let menu = dom::element_by_id(&target)?;
    let control = burger.clone();
    Ok(EventListener::new(burger, "click", move |_event| {
        dom::toggle_class(&control, ACTIVE_CLASS);
        dom::toggle_class(&menu, ACTIVE_CLASS);
    }))
}
