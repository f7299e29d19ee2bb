//! Browser host driven by the transition controller.

use std::cell::RefCell;
use std::rc::Weak;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use vizij_transition_core::{
    DeferredAssignment, Host, RequestToken, TransitionController, ViewportMetrics,
};

use crate::dom::WebElement;

pub type WebController = TransitionController<WebHost>;

pub struct WebHost {
    window: Window,
    document: Document,
    /// Back-reference used by listener callbacks to report animation ends.
    controller: Weak<RefCell<WebController>>,
}

impl WebHost {
    pub fn new(window: Window, document: Document, controller: Weak<RefCell<WebController>>) -> Self {
        Self {
            window,
            document,
            controller,
        }
    }
}

impl Host for WebHost {
    type Element = WebElement;
    type Listener = EventListener;
    type Deferred = Timeout;

    fn viewport(&self) -> ViewportMetrics {
        let (scroll_top, content_height) = self
            .document
            .document_element()
            .map(|root| (f64::from(root.scroll_top()), f64::from(root.scroll_height())))
            .unwrap_or_default();
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        ViewportMetrics {
            scroll_top,
            viewport_height,
            content_height,
        }
    }

    fn navigate(&mut self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            log::warn!(target: "vizij_transition", "navigation to {url} failed: {err:?}");
        }
    }

    fn defer(&mut self, assignment: DeferredAssignment<WebElement>) -> Timeout {
        Timeout::new(0, move || assignment.complete())
    }

    fn cancel_deferred(&mut self, handle: Timeout) {
        drop(handle);
    }

    fn listen_animation_end(
        &mut self,
        element: &WebElement,
        event: &'static str,
        token: RequestToken,
    ) -> EventListener {
        let controller = self.controller.clone();
        let subject = JsValue::from(element.0.clone());
        EventListener::new(&element.0, event, move |e| {
            // Animation events bubble; only the subject's own animation counts.
            let own = e
                .target()
                .is_some_and(|target| JsValue::from(target) == subject);
            if !own {
                return;
            }
            let Some(controller) = controller.upgrade() else {
                return;
            };
            match controller.try_borrow_mut() {
                Ok(mut ctrl) => ctrl.handle_animation_end(token),
                Err(_) => log::warn!(
                    target: "vizij_transition",
                    "animation end {token:?} arrived while the controller was busy"
                ),
            };
        })
    }

    fn unlisten(&mut self, listener: EventListener) {
        drop(listener);
    }

    fn random_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
