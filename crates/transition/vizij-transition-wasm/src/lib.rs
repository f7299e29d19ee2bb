//! wasm-bindgen interface for Vizij page transitions.
//!
//! ```javascript
//! import init, { PageTransitions } from "./pkg/vizij_transition_wasm.js";
//! await init();
//! const transitions = new PageTransitions({ stylesheets: ["FullPageAnimationsPrefixed.css"] });
//! transitions.showEntrance();
//! button.onclick = () => transitions.triggerExit("next.html", "fadeOut");
//! ```

pub mod dom;
pub mod host;
mod logger;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use log::LevelFilter;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Node};

use vizij_transition_core::{TransitionConfig, TransitionController};

use crate::dom::{HeadSink, WebElement, WebNode, WebProbe, XhrSource};
use crate::host::{WebController, WebHost};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Page transitions bound to `document.body`.
#[wasm_bindgen]
pub struct PageTransitions {
    controller: Rc<RefCell<WebController>>,
    click_listener: Option<EventListener>,
}

#[wasm_bindgen]
impl PageTransitions {
    /// Detect capabilities, install the configured stylesheets and the perspective
    /// depth, and (when supported and enabled) intercept anchor clicks.
    /// Pass a config object or undefined/null for defaults.
    /// Example:
    ///   new PageTransitions({ timing: { duration: "0.6s" }, intercept_clicks: false })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PageTransitions, JsError> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        logger::init(if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });

        let cfg: TransitionConfig = if jsvalue_is_undefined_or_null(&config) {
            TransitionConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        cfg.validate()
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;

        let window = web_sys::window().ok_or_else(|| JsError::new("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsError::new("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsError::new("document has no <body>"))?;
        let root = document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| JsError::new("document has no HTML root element"))?;
        let probe = WebProbe::new(&document)
            .ok_or_else(|| JsError::new("could not create a probe element"))?;
        let mut sink = HeadSink::new(document.clone());
        let intercept = cfg.intercept_clicks;

        let controller = Rc::new_cyclic(|weak| {
            RefCell::new(TransitionController::initialize(
                WebHost::new(window, document, weak.clone()),
                &probe,
                &XhrSource,
                &mut sink,
                cfg,
                WebElement(body),
                WebElement(root),
            ))
        });

        let mut transitions = PageTransitions {
            controller,
            click_listener: None,
        };
        if intercept && transitions.supports_transform_animation() {
            transitions.enable_click_interception();
        }
        Ok(transitions)
    }

    /// Play an entrance animation on the body (random when omitted).
    #[wasm_bindgen(js_name = showEntrance)]
    pub fn show_entrance(&self, animation: Option<String>) {
        self.with_controller(|ctrl| ctrl.show_entrance(animation.as_deref()));
    }

    /// Play an exit animation (random when omitted), then navigate to `action`.
    #[wasm_bindgen(js_name = triggerExit)]
    pub fn trigger_exit(&self, action: String, animation: Option<String>) {
        self.with_controller(|ctrl| ctrl.trigger_exit(&action, animation.as_deref()));
    }

    /// Perspective depth on the `<html>` element, e.g. `"1200px"`.
    #[wasm_bindgen(js_name = setPerspectiveDepth)]
    pub fn set_perspective_depth(&self, depth: String) {
        self.with_controller(|ctrl| ctrl.set_perspective_depth(&depth));
    }

    /// Capture-phase click listener on the body turning plain anchor clicks into exits.
    /// Calling it again keeps the existing listener.
    #[wasm_bindgen(js_name = enableClickInterception)]
    pub fn enable_click_interception(&mut self) {
        if self.click_listener.is_some() {
            return;
        }
        let subject = self.controller.borrow().subject().0.clone();
        let controller = Rc::downgrade(&self.controller);
        let options = EventListenerOptions {
            phase: EventListenerPhase::Capture,
            passive: false,
        };
        self.click_listener = Some(EventListener::new_with_options(
            &subject,
            "click",
            options,
            move |event| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                    return;
                };
                let Some(controller) = controller.upgrade() else {
                    return;
                };
                let Ok(mut ctrl) = controller.try_borrow_mut() else {
                    return;
                };
                if ctrl.handle_click(WebNode(target)).is_intercepted() {
                    event.stop_propagation();
                    event.prevent_default();
                }
            },
        ));
    }

    #[wasm_bindgen(js_name = supportsTransformAnimation)]
    pub fn supports_transform_animation(&self) -> bool {
        self.controller.borrow().supports_transform_animation()
    }

    /// Detected capability set as a plain object.
    pub fn capabilities(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.controller.borrow().capabilities())
            .map_err(|e| JsError::new(&format!("capabilities error: {e}")))
    }

    /// "Idle", "Entering" or "ExitPending".
    pub fn state(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.controller.borrow().state())
            .map_err(|e| JsError::new(&format!("state error: {e}")))
    }
}

impl PageTransitions {
    fn with_controller(&self, f: impl FnOnce(&mut WebController)) {
        match self.controller.try_borrow_mut() {
            Ok(mut ctrl) => f(&mut ctrl),
            Err(_) => log::warn!(target: "vizij_transition", "controller busy; call ignored"),
        }
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
