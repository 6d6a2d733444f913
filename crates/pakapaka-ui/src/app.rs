//! Page entry points: the wasm start hook and the `initUIBehaviors` export.

use crate::behaviors::{UiBindings, init_ui_behaviors};
use crate::config::{CONFIG_ATTRIBUTES, ConfigError, UiConfig};
use gloo::console;
use gloo::events::EventListener;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::Element;

thread_local! {
    static PAGE_BINDINGS: RefCell<Option<UiBindings>> = const { RefCell::new(None) };
}

/// Bindings handle returned to JavaScript callers.
#[wasm_bindgen(js_name = UiBindings)]
pub struct PageBindings {
    inner: Option<UiBindings>,
}

#[wasm_bindgen(js_class = UiBindings)]
impl PageBindings {
    /// Number of listeners still attached.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn count(&self) -> usize {
        self.inner.as_ref().map_or(0, UiBindings::len)
    }

    /// Detach every listener. Calling it twice is a no-op.
    pub fn dispose(&mut self) {
        if let Some(bindings) = self.inner.take() {
            bindings.dispose();
        }
    }
}

/// Bind every behavior under `root`, reading configuration from its data
/// attributes.
///
/// # Errors
/// Throws when a configuration attribute is malformed.
#[wasm_bindgen(js_name = initUIBehaviors)]
pub fn init_page_behaviors(root: &Element) -> Result<PageBindings, JsValue> {
    let config = read_config(root).map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(PageBindings {
        inner: Some(init_ui_behaviors(root, &config)),
    })
}

/// Entrypoint for the page bundle: binds `document.body` once the DOM is
/// parsed and keeps the bindings for the page's lifetime.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let document = gloo::utils::document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event| bind_body()).forget();
    } else {
        bind_body();
    }
}

fn bind_body() {
    let Some(body) = gloo::utils::document().body() else {
        console::error!("page has no body; behaviors not bound");
        return;
    };
    let config = read_config(&body).unwrap_or_else(|err| {
        console::error!("invalid behavior configuration, using defaults", err.to_string());
        UiConfig::default()
    });
    let bindings = init_ui_behaviors(&body, &config);
    PAGE_BINDINGS.with(|slot| {
        if let Some(previous) = slot.borrow_mut().replace(bindings) {
            previous.dispose();
        }
    });
}

fn read_config(root: &Element) -> Result<UiConfig, ConfigError> {
    let values: Vec<(&str, String)> = CONFIG_ATTRIBUTES
        .iter()
        .filter_map(|name| root.get_attribute(name).map(|value| (*name, value)))
        .collect();
    let lang = gloo::utils::document()
        .document_element()
        .and_then(|html| html.get_attribute("lang"));
    UiConfig::from_attributes(
        values.iter().map(|(name, value)| (*name, value.as_str())),
        lang.as_deref(),
    )
}
