//! Kernel configuration
//!
//! One [`KernelConfig`] carries every option a kernel may recognize. Kernels
//! ignore the parts they have no use for (Eagle never blends, MMPX never
//! measures distances, and so on).

use pixscale_core::{
    BlendGate, ExactEquality, IntegerLerp, ManhattanMetric, YuvMetric, YuvThreshold,
};

/// Gating rule used by the xBR corner filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XbrVariant {
    /// First published rule: blend only when the edge score strictly
    /// favors one direction.
    Original,
    /// Later rule: also require a structural guard before the directional
    /// blends, and soften the corner 1:1 otherwise (including ties).
    #[default]
    Revised,
}

/// Options shared by all upscale kernels.
///
/// # Fields
///
/// * `equality` - same/different test over Key colors
/// * `metric` - distance over Key colors (xBR edge scoring)
/// * `lerp` - blend over Work colors
/// * `allow_blending` - when `false`, every blend picks its dominant
///   operand instead, so output only contains source colors
/// * `xbr_variant` - which xBR gating rule to use
#[derive(Debug, Clone)]
pub struct KernelConfig<Q, M, L> {
    pub equality: Q,
    pub metric: M,
    pub lerp: L,
    pub allow_blending: bool,
    pub xbr_variant: XbrVariant,
}

impl<Q, M, L> KernelConfig<Q, M, L> {
    /// Configuration with blending enabled and the revised xBR rule.
    pub fn new(equality: Q, metric: M, lerp: L) -> Self {
        Self {
            equality,
            metric,
            lerp,
            allow_blending: true,
            xbr_variant: XbrVariant::default(),
        }
    }

    /// Enable or disable blending.
    pub fn with_blending(mut self, allow: bool) -> Self {
        self.allow_blending = allow;
        self
    }

    /// Select the xBR gating rule.
    pub fn with_xbr_variant(mut self, variant: XbrVariant) -> Self {
        self.xbr_variant = variant;
        self
    }

    /// The configured lerp behind a [`BlendGate`] honoring `allow_blending`.
    pub fn gated_lerp(&self) -> BlendGate<L>
    where
        L: Clone,
    {
        BlendGate::new(self.lerp.clone(), self.allow_blending)
    }
}

impl KernelConfig<YuvThreshold, YuvMetric, IntegerLerp> {
    /// Classic HQx thresholds over [`pixscale_core::Yuv`] keys.
    pub fn yuv() -> Self {
        Self::new(YuvThreshold::default(), YuvMetric, IntegerLerp)
    }
}

impl KernelConfig<ExactEquality, ManhattanMetric, IntegerLerp> {
    /// Exact comparisons over keys that are Work colors themselves.
    pub fn exact() -> Self {
        Self::new(ExactEquality, ManhattanMetric, IntegerLerp)
    }
}
