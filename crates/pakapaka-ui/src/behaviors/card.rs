//! Collapsible post cards.

use crate::core::markers::{CARD_CONTENT_ATTR, CARD_ICON_ATTR, HIDDEN_CLASS, ROTATED_CLASS};
use crate::dom;
use crate::error::BindError;
use gloo::events::EventListener;
use web_sys::Element;

/// Toggle the card content and rotate the header chevron together.
///
/// # Errors
/// Returns [`BindError`] when the content or chevron cannot be found.
pub fn bind(header: &Element) -> Result<EventListener, BindError> {
    let content = dom::referenced_or(header, CARD_CONTENT_ATTR, |header| {
        dom::step(
            header.next_element_sibling(),
            "next sibling of the card header",
        )
    })?;
    let icon = dom::referenced_or(header, CARD_ICON_ATTR, nested_chevron)?;
    Ok(EventListener::new(header, "click", move |_event| {
        dom::toggle_class(&content, HIDDEN_CLASS);
        dom::toggle_class(&icon, ROTATED_CLASS);
    }))
}

// header > title + button > span.icon > i
fn nested_chevron(header: &Element) -> Result<Element, BindError> {
    let title = dom::step(header.first_element_child(), "card header title")?;
    let button = dom::step(title.next_element_sibling(), "card header button")?;
    let wrapper = dom::step(button.first_element_child(), "card header icon wrapper")?;
    dom::step(wrapper.first_element_child(), "card header chevron")
}
