/// How the scrolling container's pixel height is determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeightRule {
    /// A fixed, configured height. Never recomputed from measurements.
    Fixed(u32),
    /// The remaining viewport height below the container's top edge.
    ClipToWindow,
    /// The measured height of the immediate parent/content region.
    FillParent,
}

/// Host measurements consumed by the non-fixed [`HeightRule`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightProbe {
    /// The container's offset from the top of the window.
    pub top_offset: u32,
    /// The measured height of the container's parent element.
    pub parent_height: u32,
}

/// Resolves the container height from the configured rule and the current
/// measurements.
///
/// Idempotent: re-invoking with unchanged inputs yields the same value.
/// Callers should only propagate the result downstream when it differs from
/// the previous one, to avoid redundant recomputation.
pub fn resolve_container_height(
    rule: &HeightRule,
    viewport_height: u32,
    probe: HeightProbe,
) -> u32 {
    match *rule {
        HeightRule::Fixed(height) => height,
        HeightRule::ClipToWindow => viewport_height.saturating_sub(probe.top_offset),
        HeightRule::FillParent => probe.parent_height,
    }
}
