//! Animation catalog: the identifiers picked when a caller does not name one.

use serde::{Deserialize, Serialize};

use crate::error::TransitionError;
use crate::Result;

/// Two disjoint, ordered lists of keyframe animation names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationCatalog {
    /// Entrance animations.
    pub bring_to_view: Vec<String>,
    /// Exit animations.
    pub remove_from_view: Vec<String>,
}

impl Default for AnimationCatalog {
    fn default() -> Self {
        Self {
            bring_to_view: [
                "rotateInLeft",
                "fadeIn",
                "whirlIn",
                "fallFromTop",
                "slideInSkew",
                "tumbleIn",
                "expandIn",
            ]
            .map(String::from)
            .to_vec(),
            remove_from_view: [
                "rotateOutRight",
                "fadeOut",
                "whirlOut",
                "slideOutSkew",
                "tumbleOut",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl AnimationCatalog {
    /// Build a validated catalog.
    pub fn new(bring_to_view: Vec<String>, remove_from_view: Vec<String>) -> Result<Self> {
        let catalog = Self {
            bring_to_view,
            remove_from_view,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Both lists non-empty and disjoint.
    pub fn validate(&self) -> Result<()> {
        if self.bring_to_view.is_empty() {
            return Err(TransitionError::EmptyCatalog {
                kind: "bring_to_view",
            });
        }
        if self.remove_from_view.is_empty() {
            return Err(TransitionError::EmptyCatalog {
                kind: "remove_from_view",
            });
        }
        if let Some(dup) = self
            .bring_to_view
            .iter()
            .find(|name| self.remove_from_view.contains(name))
        {
            return Err(TransitionError::OverlappingCatalog {
                identifier: dup.clone(),
            });
        }
        Ok(())
    }

    /// Entrance animation for a unit random value `u` in `[0, 1)`.
    #[inline]
    pub fn pick_entrance(&self, u: f64) -> Option<&str> {
        pick_uniform(&self.bring_to_view, u)
    }

    /// Exit animation for a unit random value `u` in `[0, 1)`.
    #[inline]
    pub fn pick_exit(&self, u: f64) -> Option<&str> {
        pick_uniform(&self.remove_from_view, u)
    }
}

/// Map `u` in `[0, 1)` onto an index of `items`, each index equally likely.
/// Out-of-range or NaN inputs are clamped.
pub fn pick_uniform(items: &[String], u: f64) -> Option<&str> {
    if items.is_empty() {
        return None;
    }
    let u = if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0) };
    let idx = ((u * items.len() as f64) as usize).min(items.len() - 1);
    Some(items[idx].as_str())
}
