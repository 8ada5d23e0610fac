//! WASM bindings wiring the enhancements into the rendered docs page.
//!
//! The docs page loads this module next to the Swagger UI bundle and calls
//! [`init_docs_page`] once on load and [`enhance_operations`] after the
//! operation list has rendered. Every function tolerates missing DOM nodes
//! so a partially rendered page degrades to a plain one instead of
//! throwing.

use crate::environment::{DocsEnvironment, DEFAULT_SERVER, STORAGE_KEY};
use crate::samples::{generate_sample, SampleLanguage};
use js_sys::{Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event, ScrollBehavior, ScrollToOptions, Window};

/// Scroll offset past which the scroll-to-top control becomes visible.
const SCROLL_THRESHOLD: f64 = 300.0;

const BUTTON_STYLE: &str = "position: fixed; bottom: 32px; right: 32px; width: 56px; \
     height: 56px; border-radius: 50%; background: #00A67E; color: white; border: none; \
     font-size: 24px; cursor: pointer; z-index: 1000;";

const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; right: 0; bottom: 0; \
     background: rgba(0,0,0,0.6); z-index: 10000; overflow-y: auto; padding: 40px; \
     cursor: pointer;";

const PANEL_STYLE: &str = "background: #2C3E50; color: #F8F9FA; padding: 20px; \
     border-radius: 12px; margin-bottom: 16px; white-space: pre; overflow-x: auto; \
     font-size: 13px;";

/// Initialize the page-level enhancements.
///
/// Restores the persisted environment choice, wires the selector, adds the
/// scroll-to-top control, and installs the `fetch` timing logger.
#[wasm_bindgen]
pub fn init_docs_page() -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let Some(document) = window.document() else {
        return Ok(());
    };

    setup_environment_selector(&window, &document)?;
    add_scroll_top_button(&window, &document)?;
    install_fetch_timing(&window)?;

    Ok(())
}

/// The server URL persisted by the environment selector, falling back to
/// production.
#[wasm_bindgen]
#[must_use]
pub fn selected_server() -> String {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string())
}

/// Generate an SDK sample for an endpoint; `language` is a tab label such
/// as `"Go"` or `"cURL"`.
#[wasm_bindgen]
#[must_use]
pub fn sdk_sample(language: &str, method: &str, path: &str) -> String {
    match SampleLanguage::from_label(language) {
        Some(language) => generate_sample(language, method, path),
        None => String::new(),
    }
}

/// Attach an "SDK Examples" button to every rendered operation block.
///
/// Safe to call repeatedly; blocks that already carry a button are
/// skipped.
#[wasm_bindgen]
pub fn enhance_operations() -> Result<(), JsValue> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };

    let blocks = document.query_selector_all(".opblock")?;
    for index in 0..blocks.length() {
        let Some(node) = blocks.item(index) else {
            continue;
        };
        let Ok(block) = node.dyn_into::<Element>() else {
            continue;
        };
        add_samples_button(&document, &block)?;
    }

    Ok(())
}

/// Prompt for a bearer token and pre-authorize the docs renderer with it.
#[wasm_bindgen]
pub fn prompt_auth_token() -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };

    let token = window
        .prompt_with_message("Enter your Bearer token or API key:")?
        .unwrap_or_default();
    if token.is_empty() {
        return Ok(());
    }

    // window.ui.preauthorizeApiKey("bearerAuth", token), when the renderer
    // has finished loading.
    let ui = Reflect::get(&window, &JsValue::from_str("ui")).unwrap_or(JsValue::UNDEFINED);
    if ui.is_undefined() || ui.is_null() {
        return Ok(());
    }

    if let Ok(preauthorize) =
        Reflect::get(&ui, &JsValue::from_str("preauthorizeApiKey"))?.dyn_into::<Function>()
    {
        let _ = preauthorize.call2(&ui, &JsValue::from_str("bearerAuth"), &JsValue::from_str(&token));
    }

    Ok(())
}

fn setup_environment_selector(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(element) = document.get_element_by_id("env-select") else {
        return Ok(());
    };
    let Ok(select) = element.dyn_into::<web_sys::HtmlSelectElement>() else {
        return Ok(());
    };

    select.set_value(&selected_server());

    let win = window.clone();
    let on_change = Closure::wrap(Box::new(move |event: Event| {
        let Some(target) = event.target() else {
            return;
        };
        let Ok(select) = target.dyn_into::<web_sys::HtmlSelectElement>() else {
            return;
        };

        let url = select.value();
        if let Ok(Some(storage)) = win.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, &url);
        }

        let environment = DocsEnvironment::classify(&url);
        console::log_1(&format!("Environment switched to: {}", environment.label()).into());
    }) as Box<dyn FnMut(Event)>);

    select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    Ok(())
}

fn add_scroll_top_button(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };

    let button = document.create_element("button")?;
    button.set_class_name("quick-nav-button");
    button.set_text_content(Some("\u{2191}"));
    button.set_attribute("title", "Back to top")?;
    button.set_attribute("style", &format!("{BUTTON_STYLE} display: none;"))?;
    body.append_child(&button)?;

    let win = window.clone();
    let on_click = Closure::wrap(Box::new(move |_event: Event| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }) as Box<dyn FnMut(Event)>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let win = window.clone();
    let toggle = button.clone();
    let on_scroll = Closure::wrap(Box::new(move |_event: Event| {
        let past_threshold = win.scroll_y().unwrap_or(0.0) > SCROLL_THRESHOLD;
        let display = if past_threshold { "block" } else { "none" };
        let _ = toggle.set_attribute("style", &format!("{BUTTON_STYLE} display: {display};"));
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();

    Ok(())
}

/// Wrap `window.fetch` so every API call logs its duration.
fn install_fetch_timing(window: &Window) -> Result<(), JsValue> {
    let Ok(original) =
        Reflect::get(window, &JsValue::from_str("fetch"))?.dyn_into::<Function>()
    else {
        return Ok(());
    };

    let win = window.clone();
    let timed = Closure::wrap(Box::new(move |input: JsValue, init: JsValue| -> JsValue {
        let performance = win.performance();
        let start = performance.as_ref().map_or(0.0, web_sys::Performance::now);
        let url = input.as_string().unwrap_or_default();

        let result = match original.call2(&win, &input, &init) {
            Ok(promise) => promise,
            Err(error) => return error,
        };

        // promise.then(response => { log; return response; })
        let then_value =
            Reflect::get(&result, &JsValue::from_str("then")).unwrap_or(JsValue::UNDEFINED);
        let Ok(then) = then_value.dyn_into::<Function>() else {
            return result;
        };

        let log = Closure::once_into_js(move |response: JsValue| -> JsValue {
            let elapsed = performance.as_ref().map_or(0.0, |p| p.now() - start);
            console::log_1(&format!("API Call: {url} - {elapsed:.0}ms").into());
            response
        });

        then.call1(&result, &log).unwrap_or(result)
    }) as Box<dyn FnMut(JsValue, JsValue) -> JsValue>);

    Reflect::set(
        window,
        &JsValue::from_str("fetch"),
        timed.as_ref().unchecked_ref(),
    )?;
    timed.forget();

    Ok(())
}

fn add_samples_button(document: &Document, block: &Element) -> Result<(), JsValue> {
    let Some(summary) = block.query_selector(".opblock-summary")? else {
        return Ok(());
    };
    if summary.query_selector(".sdk-examples-btn")?.is_some() {
        return Ok(());
    }

    let method = block
        .query_selector(".opblock-summary-method")?
        .and_then(|e| e.text_content())
        .unwrap_or_default()
        .trim()
        .to_uppercase();
    let path = block
        .query_selector(".opblock-summary-path")?
        .and_then(|e| e.text_content())
        .unwrap_or_default()
        .trim()
        .to_string();
    if method.is_empty() || path.is_empty() {
        return Ok(());
    }

    let button = document.create_element("button")?;
    button.set_class_name("sdk-examples-btn");
    button.set_text_content(Some("SDK Examples"));
    summary.append_child(&button)?;

    let doc = document.clone();
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        event.stop_propagation();
        let _ = show_samples_panel(&doc, &method, &path);
    }) as Box<dyn FnMut(Event)>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}

/// Open a dismissable overlay showing the samples for one endpoint.
fn show_samples_panel(document: &Document, method: &str, path: &str) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };

    let overlay = document.create_element("div")?;
    overlay.set_class_name("sdk-modal");
    overlay.set_attribute("style", OVERLAY_STYLE)?;

    for language in SampleLanguage::all() {
        let panel = document.create_element("pre")?;
        panel.set_attribute("style", PANEL_STYLE)?;
        panel.set_text_content(Some(&format!(
            "// {}: {method} {path}\n{}",
            language.label(),
            generate_sample(language, method, path)
        )));
        overlay.append_child(&panel)?;
    }

    body.append_child(&overlay)?;

    let target = overlay.clone();
    let on_click = Closure::wrap(Box::new(move |_event: Event| {
        target.remove();
    }) as Box<dyn FnMut(Event)>);
    overlay.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}
