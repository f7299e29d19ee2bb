//! Host environment contract driven by the transition controller.

use serde::{Deserialize, Serialize};

use crate::trigger::{DeferredAssignment, StyleTarget};

/// Identifies one registered animation-end listener.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RequestToken(pub u32);

/// Scroll and size of the document, in CSS pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

impl ViewportMetrics {
    /// Perspective origin centred on the visible part of the content,
    /// e.g. `"50% 25%"`. `None` when the content has no height.
    pub fn perspective_origin(&self) -> Option<String> {
        if self.content_height.is_nan() || self.content_height <= 0.0 {
            return None;
        }
        let ratio = (self.scroll_top + self.viewport_height / 2.0) / self.content_height;
        Some(format!("50% {}%", ratio * 100.0))
    }
}

/// Everything the controller needs from the page.
/// Adapters (WASM/native mocks) implement this.
pub trait Host {
    type Element: StyleTarget + Clone;
    /// Handle of a registered listener; dropping it via [`Host::unlisten`] removes it.
    type Listener;
    /// Handle of a queued [`DeferredAssignment`].
    type Deferred;

    fn viewport(&self) -> ViewportMetrics;

    /// Full-page navigation to `url`.
    fn navigate(&mut self, url: &str);

    /// Complete `assignment` on the next event-loop turn.
    fn defer(&mut self, assignment: DeferredAssignment<Self::Element>) -> Self::Deferred;

    /// Drop a queued assignment before it runs. Handles that already ran are ignored.
    fn cancel_deferred(&mut self, handle: Self::Deferred);

    /// Register a listener for `event` on `element` that reports back `token`.
    fn listen_animation_end(
        &mut self,
        element: &Self::Element,
        event: &'static str,
        token: RequestToken,
    ) -> Self::Listener;

    fn unlisten(&mut self, listener: Self::Listener);

    /// Uniform random value in `[0, 1)`.
    fn random_unit(&mut self) -> f64;
}
