//! Error types for transition configuration.
//!
//! Runtime operations never fail; errors only arise while building a configuration.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransitionError {
    /// A catalog sequence has no entries to pick from.
    #[error("animation catalog '{kind}' is empty")]
    EmptyCatalog { kind: &'static str },

    /// An identifier is listed as both an entrance and an exit animation.
    #[error("animation '{identifier}' is listed in both bring_to_view and remove_from_view")]
    OverlappingCatalog { identifier: String },

    /// Config JSON did not parse.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}
