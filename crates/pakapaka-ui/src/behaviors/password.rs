//! Password visibility toggle.

use crate::core::markers::PASSWORD_TARGET_ATTR;
use crate::core::password::FieldVisibility;
use crate::dom;
use crate::error::BindError;
use gloo::console;
use gloo::events::EventListener;
use web_sys::Element;

/// Flip the input between `password` and `text` and restyle the eye icon.
///
/// # Errors
/// Returns [`BindError`] when the controlled input cannot be found.
pub fn bind(icon: &Element) -> Result<EventListener, BindError> {
    let input = dom::referenced_or(icon, PASSWORD_TARGET_ATTR, sibling_input)?;
    let eye = icon.clone();
    Ok(EventListener::new(icon, "click", move |_event| {
        let next =
            FieldVisibility::from_input_type(input.get_attribute("type").as_deref()).toggled();
        if let Err(err) = input.set_attribute("type", next.input_type()) {
            console::error!("password type update failed", err);
            return;
        }
        eye.set_class_name(next.icon_class());
    }))
}

// label > span.icon > i, followed by div.control > input
fn sibling_input(icon: &Element) -> Result<Element, BindError> {
    let wrapper = dom::step(icon.parent_element(), "parent of the eye icon")?;
    let label = dom::step(wrapper.parent_element(), "label around the eye icon")?;
    let control = dom::step(label.next_element_sibling(), "control after the label")?;
    dom::step(control.first_element_child(), "password input")
}
