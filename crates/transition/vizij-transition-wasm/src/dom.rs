//! `web-sys` implementations of the core adapter traits.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, HtmlAnchorElement, HtmlElement, Node, XmlHttpRequest};

use vizij_transition_core::{ClickNode, StyleProbe, StyleTarget, StylesheetSink, StylesheetSource};

/// HTML element whose inline style is read and written by DOM property name.
#[derive(Clone, Debug)]
pub struct WebElement(pub HtmlElement);

impl StyleTarget for WebElement {
    fn style_property(&self, name: &str) -> String {
        Reflect::get(&self.0.style(), &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    fn set_style_property(&self, name: &str, value: &str) {
        if let Err(err) = Reflect::set(
            &self.0.style(),
            &JsValue::from_str(name),
            &JsValue::from_str(value),
        ) {
            log::warn!(target: "vizij_transition", "style.{name} = {value:?} failed: {err:?}");
        }
    }
}

/// Style declaration of a detached `<div>`; dropped with the probe.
pub struct WebProbe {
    style: CssStyleDeclaration,
}

impl WebProbe {
    pub fn new(document: &Document) -> Option<Self> {
        let div = document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Self { style: div.style() })
    }
}

impl StyleProbe for WebProbe {
    fn supports(&self, property: &str) -> bool {
        Reflect::get(&self.style, &JsValue::from_str(property))
            .map(|v| !v.is_undefined())
            .unwrap_or(false)
    }
}

/// Blocking `XMLHttpRequest` GET. The stylesheet has to be in place before first
/// paint, so the request is synchronous.
#[derive(Clone, Copy, Debug, Default)]
pub struct XhrSource;

fn sync_get(location: &str) -> Result<String, JsValue> {
    let request = XmlHttpRequest::new()?;
    request.open_with_async("GET", location, false)?;
    request.send()?;
    Ok(request.response_text()?.unwrap_or_default())
}

impl StylesheetSource for XhrSource {
    fn fetch(&self, location: &str) -> String {
        sync_get(location).unwrap_or_else(|err| {
            log::warn!(target: "vizij_transition", "GET {location} failed: {err:?}");
            String::new()
        })
    }
}

/// Appends `<style type="text/css">` nodes to the document head.
#[derive(Clone, Debug)]
pub struct HeadSink {
    document: Document,
}

impl HeadSink {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn try_append(&self, css: &str) -> Result<(), JsValue> {
        let style = self.document.create_element("style")?;
        style.set_attribute("type", "text/css")?;
        style.append_child(&self.document.create_text_node(css))?;
        let head = self
            .document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
        head.append_child(&style)?;
        Ok(())
    }
}

impl StylesheetSink for HeadSink {
    fn append_stylesheet(&mut self, css: &str) {
        if let Err(err) = self.try_append(css) {
            log::warn!(target: "vizij_transition", "stylesheet install failed: {err:?}");
        }
    }
}

/// Any DOM node on a click target's ancestor chain.
#[derive(Clone, Debug)]
pub struct WebNode(pub Node);

impl ClickNode for WebNode {
    fn parent(&self) -> Option<Self> {
        self.0.parent_node().map(WebNode)
    }

    fn has_click_handler(&self) -> bool {
        self.0
            .dyn_ref::<HtmlElement>()
            .is_some_and(|el| el.onclick().is_some())
    }

    fn anchor_href(&self) -> Option<String> {
        // `<a>` without an href is a placeholder, not a hyperlink.
        self.0
            .dyn_ref::<HtmlAnchorElement>()
            .filter(|a| a.has_attribute("href"))
            .map(HtmlAnchorElement::href)
    }
}
