//! Animation trigger: writes timing and the animation name onto an element.

use crate::capability::{CapabilitySet, ResolvedProperty};
use crate::config::AnimationTiming;

/// Style access on one element. Names are DOM camelCase property names
/// (`WebkitAnimationName`, `perspectiveOrigin`, ...).
///
/// Methods take `&self`; host elements are handles with interior mutability.
pub trait StyleTarget {
    /// Current inline value, empty when unset.
    fn style_property(&self, name: &str) -> String;
    fn set_style_property(&self, name: &str, value: &str);
}

/// Second half of a reapply: a style write the host must perform on the next
/// event-loop turn, after the style engine has observed the cleared value.
#[derive(Clone, Debug)]
#[must_use = "a deferred assignment does nothing until completed"]
pub struct DeferredAssignment<E> {
    element: E,
    property: String,
    value: String,
}

impl<E: StyleTarget> DeferredAssignment<E> {
    /// Value written on completion.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Perform the write.
    pub fn complete(self) {
        self.element.set_style_property(&self.property, &self.value);
    }
}

/// Write every timing sub-property of the `animation` family onto `element`.
pub fn apply_timing<E: StyleTarget + ?Sized>(
    element: &E,
    animation: &ResolvedProperty,
    timing: &AnimationTiming,
) {
    for (suffix, value) in timing.properties() {
        element.set_style_property(&animation.sub(suffix), value);
    }
}

/// Start `identifier` on `element` under `timing`.
///
/// When the element already carries `identifier` the name is cleared now and the
/// returned [`DeferredAssignment`] restores it; re-setting an unchanged value would not
/// restart the animation. Callers gate on
/// [`CapabilitySet::supports_transform_animation`]; without animation support this
/// logs and does nothing.
pub fn apply<E: StyleTarget + Clone>(
    element: &E,
    identifier: &str,
    caps: &CapabilitySet,
    timing: &AnimationTiming,
) -> Option<DeferredAssignment<E>> {
    let Some(animation) = caps.animation() else {
        log::warn!(
            target: "vizij_transition",
            "apply({identifier:?}) skipped: animations unsupported"
        );
        return None;
    };
    apply_timing(element, animation, timing);

    let name_prop = animation.sub("Name");
    if element.style_property(&name_prop) == identifier {
        Some(clear_for_restart(element, name_prop, identifier))
    } else {
        element.set_style_property(&name_prop, identifier);
        None
    }
}

/// Like [`apply`], but always goes through the cleared name, even when `element`
/// does not carry `identifier` right now (e.g. a queued restart was cancelled).
pub fn restart<E: StyleTarget + Clone>(
    element: &E,
    identifier: &str,
    caps: &CapabilitySet,
    timing: &AnimationTiming,
) -> Option<DeferredAssignment<E>> {
    let animation = caps.animation()?;
    apply_timing(element, animation, timing);
    Some(clear_for_restart(element, animation.sub("Name"), identifier))
}

fn clear_for_restart<E: StyleTarget + Clone>(
    element: &E,
    name_prop: String,
    identifier: &str,
) -> DeferredAssignment<E> {
    element.set_style_property(&name_prop, "");
    DeferredAssignment {
        element: element.clone(),
        property: name_prop,
        value: identifier.to_string(),
    }
}
