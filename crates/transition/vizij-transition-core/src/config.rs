//! Configuration for vizij-transition-core.

use serde::{Deserialize, Serialize};

use crate::catalog::AnimationCatalog;
use crate::Result;

/// Timing applied to an element before an animation name is assigned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTiming {
    pub delay: String,
    pub duration: String,
    pub iteration_count: String,
    /// `forwards` keeps the final keyframe after playback, so no residual transform
    /// has to be written on the element.
    pub fill_mode: String,
    pub timing_function: String,
    pub play_state: String,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            delay: "0.0s".into(),
            duration: "1s".into(),
            iteration_count: "1".into(),
            fill_mode: "forwards".into(),
            timing_function: "linear".into(),
            play_state: "running".into(),
        }
    }
}

impl AnimationTiming {
    /// (sub-property suffix, value) pairs in application order.
    pub fn properties(&self) -> [(&'static str, &str); 6] {
        [
            ("Delay", self.delay.as_str()),
            ("Duration", self.duration.as_str()),
            ("IterationCount", self.iteration_count.as_str()),
            ("FillMode", self.fill_mode.as_str()),
            ("TimingFunction", self.timing_function.as_str()),
            ("PlayState", self.play_state.as_str()),
        ]
    }
}

/// Start-up and runtime settings for page transitions.
/// Missing JSON fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub timing: AnimationTiming,
    pub catalog: AnimationCatalog,
    /// Prefix-templated stylesheets fetched and installed at start-up, in order.
    pub stylesheets: Vec<String>,
    /// Perspective depth written on the root element at start-up.
    pub perspective_depth: String,
    /// Re-centre the perspective origin on the visible viewport before an entrance.
    pub adjust_perspective_origin: bool,
    /// Wire click interception at start-up when transitions are supported.
    pub intercept_clicks: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            timing: AnimationTiming::default(),
            catalog: AnimationCatalog::default(),
            stylesheets: vec![
                "FullPageAnimationsPrefixed.css".into(),
                "DemoTransformsAnimations.css".into(),
            ],
            perspective_depth: "0px".into(),
            adjust_perspective_origin: true,
            intercept_clicks: true,
        }
    }
}

impl TransitionConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()
    }
}
