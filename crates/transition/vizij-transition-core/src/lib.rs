//! Vizij Transition Core (engine-agnostic)
//!
//! Full-page entrance/exit transitions driven by CSS keyframe animations:
//! - capability detection of the vendor-prefixed transform/animation/perspective families
//! - prefix normalization of `-ms-`-templated stylesheets
//! - an animation trigger that restarts animations reliably
//! - a transition controller (entrance, exit-then-navigate, click interception)
//!
//! The page itself is reached only through small adapter traits
//! ([`StyleProbe`], [`StyleTarget`], [`StylesheetSource`], [`StylesheetSink`],
//! [`Host`], [`ClickNode`]); `vizij-transition-wasm` implements them over `web-sys`.

pub mod capability;
pub mod catalog;
pub mod click;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod stylesheet;
pub mod trigger;

// Re-exports for consumers (adapters)
pub use capability::{
    detect, AnimationEventNames, CapabilitySet, Feature, ResolvedProperty, StyleProbe,
    VendorFamily,
};
pub use catalog::AnimationCatalog;
pub use click::{find_anchor_href, ClickNode, ClickOutcome};
pub use config::{AnimationTiming, TransitionConfig};
pub use controller::{TransitionController, TransitionRequest, TransitionState};
pub use error::TransitionError;
pub use host::{Host, RequestToken, ViewportMetrics};
pub use stylesheet::{
    normalize_and_install, normalize_prefix, FileSource, MapSource, StylesheetSink,
    StylesheetSource, PREFIX_MARKER,
};
pub use trigger::{apply, restart, DeferredAssignment, StyleTarget};

/// Transition result type
pub type Result<T> = core::result::Result<T, TransitionError>;
