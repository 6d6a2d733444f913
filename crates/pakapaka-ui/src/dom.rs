//! Thin helpers over `web_sys` element lookups and class toggles.

use crate::error::BindError;
use gloo::console;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Descendants of `root` matching `selector`, in document order.
pub(crate) fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            console::error!("selector query failed", selector.to_string(), err);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Non-empty value of `attribute` on `element`.
pub(crate) fn attribute(element: &Element, attribute: &str) -> Option<String> {
    element
        .get_attribute(attribute)
        .filter(|value| !value.trim().is_empty())
}

/// Element with the given id anywhere in the document.
pub(crate) fn element_by_id(id: &str) -> Result<Element, BindError> {
    gloo::utils::document()
        .get_element_by_id(id)
        .ok_or_else(|| BindError::UnknownElement { id: id.to_string() })
}

/// Resolve the element named by `attribute`, or fall back to the legacy
/// structural lookup when the attribute is absent.
pub(crate) fn referenced_or<F>(
    element: &Element,
    attribute_name: &'static str,
    fallback: F,
) -> Result<Element, BindError>
where
    F: FnOnce(&Element) -> Result<Element, BindError>,
{
    match attribute(element, attribute_name) {
        Some(id) => element_by_id(&id),
        None => fallback(element),
    }
}

/// Unwrap one structural navigation step.
pub(crate) fn step(next: Option<Element>, step: &'static str) -> Result<Element, BindError> {
    next.ok_or(BindError::Structure { step })
}

/// Flip `class` on `element`.
pub(crate) fn toggle_class(element: &Element, class: &str) {
    if let Err(err) = element.class_list().toggle(class) {
        console::error!("class toggle failed", class.to_string(), err);
    }
}

/// Swap `from` for `to` when `from` is present.
pub(crate) fn replace_class(element: &Element, from: &str, to: &str) {
    if let Err(err) = element.class_list().replace(from, to) {
        console::error!("class replace failed", from.to_string(), err);
    }
}
