//! Flash message dismissal.

use crate::core::markers::NOTIFICATION_SELECTOR;
use crate::error::BindError;
use gloo::events::EventListener;
use web_sys::Element;

/// Remove the enclosing `.notification` when its delete button is clicked.
///
/// # Errors
/// Returns [`BindError::Structure`] when the button has no enclosing
/// notification.
pub fn bind(delete: &Element) -> Result<EventListener, BindError> {
    let notification = delete
        .closest(NOTIFICATION_SELECTOR)
        .ok()
        .flatten()
        .ok_or(BindError::Structure {
            step: "enclosing .notification",
        })?;
    Ok(EventListener::new(delete, "click", move |_event| {
        notification.remove();
    }))
}
