//! Click interception: decide whether a click should become an exit transition.

use serde::{Deserialize, Serialize};

/// Ancestor-chain view of a node that received a click.
/// Adapters (WASM/native mocks) implement this over their node handles.
pub trait ClickNode: Sized {
    fn parent(&self) -> Option<Self>;
    /// True when the node carries its own click handler.
    fn has_click_handler(&self) -> bool;
    /// Destination URL when the node is a hyperlink anchor.
    fn anchor_href(&self) -> Option<String>;
}

/// What the controller did with a click.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// Default navigation must be suppressed; an exit to `href` was triggered.
    Intercepted { href: String },
    /// Leave the event to normal delivery.
    Ignored,
}

impl ClickOutcome {
    #[inline]
    pub fn is_intercepted(&self) -> bool {
        matches!(self, Self::Intercepted { .. })
    }
}

/// Href of the nearest anchor at or above `target`, unless some node on the chain
/// owns a click handler. A handler-bearing node ends the walk immediately.
pub fn find_anchor_href<N: ClickNode>(target: N) -> Option<String> {
    let mut anchor = None;
    let mut node = Some(target);
    while let Some(current) = node {
        if current.has_click_handler() {
            return None;
        }
        if anchor.is_none() {
            anchor = current.anchor_href();
        }
        node = current.parent();
    }
    anchor
}
