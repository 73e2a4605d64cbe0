//! Upscale algorithm enumeration and capability queries

use std::fmt;

use pixscale_core::ScaleFactor;

/// Upscale algorithm families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HQ2x / HQ3x / HQ4x pattern tables
    Hqx,
    /// Low-quality pattern tables; no kernel is provided, so every scale
    /// is rejected
    Lqx,
    /// xBR edge-direction rule
    Xbr,
    /// Eagle corner copy
    Eagle,
    /// EPX (Scale2x-equivalent corner blend)
    Epx,
    /// EPX with soft corners
    EpxC,
    /// Scale2x / Scale3x
    ScaleNx,
    /// 2xSaI
    Sai2x,
    /// MMPX
    Mmpx,
    /// Reverse anti-aliasing
    ReverseAa,
}

/// Recipe tier of the pattern-table family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quality {
    Low,
    #[default]
    High,
}

const fn s(x: u32, y: u32) -> ScaleFactor {
    ScaleFactor { x, y }
}

const SQUARE_2_TO_4: &[ScaleFactor] = &[s(2, 2), s(3, 3), s(4, 4)];
const TWO_AND_THREE: &[ScaleFactor] = &[s(2, 2), s(3, 3)];
const TWO_ONLY: &[ScaleFactor] = &[s(2, 2)];

impl Algorithm {
    /// Every algorithm, in declaration order
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Hqx,
        Algorithm::Lqx,
        Algorithm::Xbr,
        Algorithm::Eagle,
        Algorithm::Epx,
        Algorithm::EpxC,
        Algorithm::ScaleNx,
        Algorithm::Sai2x,
        Algorithm::Mmpx,
        Algorithm::ReverseAa,
    ];

    /// Returns the display name of this algorithm
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Hqx => "HQx",
            Algorithm::Lqx => "LQx",
            Algorithm::Xbr => "xBR",
            Algorithm::Eagle => "Eagle",
            Algorithm::Epx => "EPX",
            Algorithm::EpxC => "EPX-C",
            Algorithm::ScaleNx => "ScaleNx",
            Algorithm::Sai2x => "2xSaI",
            Algorithm::Mmpx => "MMPX",
            Algorithm::ReverseAa => "ReverseAA",
        }
    }

    /// The pattern-table algorithm for a quality tier
    pub fn pattern_table(quality: Quality) -> Algorithm {
        match quality {
            Quality::Low => Algorithm::Lqx,
            Quality::High => Algorithm::Hqx,
        }
    }

    /// Scales this algorithm has a kernel for
    pub fn supported_scales(&self) -> &'static [ScaleFactor] {
        match self {
            Algorithm::Hqx | Algorithm::Xbr => SQUARE_2_TO_4,
            Algorithm::Lqx => &[],
            Algorithm::Eagle | Algorithm::ScaleNx => TWO_AND_THREE,
            Algorithm::Epx
            | Algorithm::EpxC
            | Algorithm::Sai2x
            | Algorithm::Mmpx
            | Algorithm::ReverseAa => TWO_ONLY,
        }
    }

    /// Returns whether `scale` is supported
    pub fn supports(&self, scale: ScaleFactor) -> bool {
        self.supported_scales().contains(&scale)
    }

    /// Output sizes reachable from a `width` x `height` source.
    ///
    /// Scales whose output would overflow `u32` are left out.
    pub fn target_sizes(&self, width: u32, height: u32) -> Vec<(u32, u32)> {
        self.supported_scales()
            .iter()
            .filter_map(|s| s.upscaled(width, height))
            .collect()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
