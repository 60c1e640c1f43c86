//! Host capability probing for CSS animation-completion events.

/// Capability seam over the hosting UI environment's style object.
///
/// Hosts that own a live document implement this against their element
/// style objects; headless use sticks with [`NoDocument`].
pub trait HostStyleProbe {
    /// Whether the host recognizes the given style property name.
    fn supports_style_property(&self, property: &str) -> bool;
}

/// Headless default: no document, no supported style properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDocument;

impl HostStyleProbe for NoDocument {
    fn supports_style_property(&self, _property: &str) -> bool {
        false
    }
}

// Modified from Modernizr, via `react-trend@1.2.5`. Probed in upstream
// declaration order.
const ANIMATION_END_NAMES: [(&str, &str); 3] = [
    ("animation", "animationend"),
    ("oAnimation", "oAnimationEnd"),
    ("WebkitAnimation", "webkitAnimationEnd"),
];

/// Resolves the host's animation-end event name.
///
/// Returns `None` when no candidate property is supported: headless hosts,
/// or browsers too old to run the upstream library at all.
pub fn supported_animation_end_name(probe: &dyn HostStyleProbe) -> Option<&'static str> {
    ANIMATION_END_NAMES
        .iter()
        .find(|(property, _)| probe.supports_style_property(property))
        .map(|(_, event)| *event)
}
