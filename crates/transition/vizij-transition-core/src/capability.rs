//! Capability detection for the transform, animation and perspective style families.
//!
//! Detection runs once against a throwaway styling context supplied by the adapter
//! (see [`StyleProbe`]) and produces an immutable [`CapabilitySet`] that every other
//! component reads. Nothing here fails: an unrecognised family is simply absent.

use serde::{Deserialize, Serialize};

/// Probes a throwaway styling context for recognised style properties.
/// Adapters (WASM/native mocks) implement this and pass it into [`detect`].
pub trait StyleProbe {
    /// True when `property` (DOM camelCase form, e.g. `WebkitAnimation`) is a settable
    /// style property on the probe context.
    fn supports(&self, property: &str) -> bool;
}

/// Style feature families the transitions depend on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Transform,
    Animation,
    Perspective,
}

impl Feature {
    #[inline]
    fn base(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Animation => "animation",
            Self::Perspective => "perspective",
        }
    }

    #[inline]
    fn capitalized(self) -> &'static str {
        match self {
            Self::Transform => "Transform",
            Self::Animation => "Animation",
            Self::Perspective => "Perspective",
        }
    }
}

/// Vendor flavour of a style property.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorFamily {
    Standard,
    Ms,
    Moz,
    Webkit,
    O,
}

impl VendorFamily {
    /// Fixed probe order: unprefixed first, then ms, Moz, Webkit, O.
    pub const PROBE_ORDER: [VendorFamily; 5] = [
        VendorFamily::Standard,
        VendorFamily::Ms,
        VendorFamily::Moz,
        VendorFamily::Webkit,
        VendorFamily::O,
    ];

    /// Prefix used in DOM property names (`msTransform`, `WebkitAnimation`, ...).
    #[inline]
    pub fn dom_prefix(self) -> &'static str {
        match self {
            Self::Standard => "",
            Self::Ms => "ms",
            Self::Moz => "Moz",
            Self::Webkit => "Webkit",
            Self::O => "O",
        }
    }

    /// Prefix used in stylesheet text (`-webkit-keyframes`, ...).
    #[inline]
    pub fn css_prefix(self) -> &'static str {
        match self {
            Self::Standard => "",
            Self::Ms => "-ms-",
            Self::Moz => "-moz-",
            Self::Webkit => "-webkit-",
            Self::O => "-o-",
        }
    }

    /// DOM property name of `feature` in this family.
    pub fn property_name(self, feature: Feature) -> String {
        match self {
            Self::Standard => feature.base().to_string(),
            _ => format!("{}{}", self.dom_prefix(), feature.capitalized()),
        }
    }

    /// Animation lifecycle event names dispatched by this family.
    ///
    /// Gecko fired the unprefixed lowercase events even while the properties were
    /// `Moz`-prefixed, so `Moz` shares the standard names.
    pub fn animation_events(self) -> AnimationEventNames {
        match self {
            Self::Standard | Self::Moz => AnimationEventNames {
                start: "animationstart",
                end: "animationend",
                iteration: "animationiteration",
            },
            Self::Ms => AnimationEventNames {
                start: "MSAnimationStart",
                end: "MSAnimationEnd",
                iteration: "MSAnimationIteration",
            },
            Self::Webkit => AnimationEventNames {
                start: "webkitAnimationStart",
                end: "webkitAnimationEnd",
                iteration: "webkitAnimationIteration",
            },
            Self::O => AnimationEventNames {
                start: "oAnimationStart",
                end: "oAnimationEnd",
                iteration: "oAnimationIteration",
            },
        }
    }
}

/// Names of the three animation lifecycle events.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct AnimationEventNames {
    pub start: &'static str,
    pub end: &'static str,
    pub iteration: &'static str,
}

/// A style property the host recognised, with the family it belongs to.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct ResolvedProperty {
    family: VendorFamily,
    name: String,
}

impl ResolvedProperty {
    pub fn new(family: VendorFamily, feature: Feature) -> Self {
        Self {
            family,
            name: family.property_name(feature),
        }
    }

    #[inline]
    pub fn family(&self) -> VendorFamily {
        self.family
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of a sub-property in the same family, e.g. `sub("Name")` on
    /// `WebkitAnimation` gives `WebkitAnimationName`.
    #[inline]
    pub fn sub(&self, suffix: &str) -> String {
        format!("{}{}", self.name, suffix)
    }
}

/// Immutable result of capability detection.
///
/// Invariants: `events` is present iff `animation` is; `vendor_prefix` always matches
/// the animation family (empty when animations are unsupported).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CapabilitySet {
    transform: Option<ResolvedProperty>,
    animation: Option<ResolvedProperty>,
    perspective: Option<ResolvedProperty>,
    events: Option<AnimationEventNames>,
    vendor_prefix: &'static str,
}

impl CapabilitySet {
    /// Build a set from the resolved family of each feature.
    pub fn from_families(
        transform: Option<VendorFamily>,
        animation: Option<VendorFamily>,
        perspective: Option<VendorFamily>,
    ) -> Self {
        Self {
            transform: transform.map(|f| ResolvedProperty::new(f, Feature::Transform)),
            animation: animation.map(|f| ResolvedProperty::new(f, Feature::Animation)),
            perspective: perspective.map(|f| ResolvedProperty::new(f, Feature::Perspective)),
            events: animation.map(VendorFamily::animation_events),
            vendor_prefix: animation.map_or("", VendorFamily::css_prefix),
        }
    }

    /// Set with every family absent.
    pub fn unsupported() -> Self {
        Self::from_families(None, None, None)
    }

    #[inline]
    pub fn transform(&self) -> Option<&ResolvedProperty> {
        self.transform.as_ref()
    }

    #[inline]
    pub fn animation(&self) -> Option<&ResolvedProperty> {
        self.animation.as_ref()
    }

    #[inline]
    pub fn perspective(&self) -> Option<&ResolvedProperty> {
        self.perspective.as_ref()
    }

    /// Lifecycle event names; `None` when animations are unsupported.
    #[inline]
    pub fn animation_events(&self) -> Option<AnimationEventNames> {
        self.events
    }

    #[inline]
    pub fn vendor_prefix(&self) -> &'static str {
        self.vendor_prefix
    }

    /// True iff both transform and animation support were detected.
    #[inline]
    pub fn supports_transform_animation(&self) -> bool {
        self.transform.is_some() && self.animation.is_some()
    }
}

/// First family (in [`VendorFamily::PROBE_ORDER`]) whose `feature` property the probe
/// recognises.
pub fn first_supported<P: StyleProbe + ?Sized>(probe: &P, feature: Feature) -> Option<VendorFamily> {
    VendorFamily::PROBE_ORDER
        .into_iter()
        .find(|family| probe.supports(&family.property_name(feature)))
}

/// Probe all three families and derive event names and the vendor prefix.
pub fn detect<P: StyleProbe + ?Sized>(probe: &P) -> CapabilitySet {
    let caps = CapabilitySet::from_families(
        first_supported(probe, Feature::Transform),
        first_supported(probe, Feature::Animation),
        first_supported(probe, Feature::Perspective),
    );
    log::debug!(
        target: "vizij_transition",
        "capabilities: transform={:?} animation={:?} perspective={:?} prefix={:?}",
        caps.transform().map(ResolvedProperty::name),
        caps.animation().map(ResolvedProperty::name),
        caps.perspective().map(ResolvedProperty::name),
        caps.vendor_prefix()
    );
    if !caps.supports_transform_animation() {
        log::warn!(
            target: "vizij_transition",
            "transform/animation support missing; transitions degrade to immediate actions"
        );
    }
    caps
}
