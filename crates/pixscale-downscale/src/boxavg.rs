//! Box averaging kernel and its capability queries

use pixscale_core::{Accumulator, DownscaleKernel, Encode, ScaleFactor, SourceBlock, WorkColor};

/// Averages an `N` x `N` block with equal weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoxDownscale<const N: usize>;

impl<W: WorkColor, const N: usize> DownscaleKernel<W> for BoxDownscale<N> {
    const RATIO_X: usize = N;
    const RATIO_Y: usize = N;

    #[inline]
    fn average<S, E: Encode<W, S>>(&self, block: &SourceBlock<'_, W>, encoder: &E) -> S {
        let mut acc = Accumulator::new();
        for dy in 0..N {
            for dx in 0..N {
                acc.add(block.get(dx, dy));
            }
        }
        encoder.encode(acc.finish())
    }
}

const RATIOS: &[ScaleFactor] = &[
    ScaleFactor::uniform(2),
    ScaleFactor::uniform(3),
    ScaleFactor::uniform(4),
    ScaleFactor::uniform(5),
];

/// Ratios the box downscaler has a kernel for.
pub fn supported_ratios() -> &'static [ScaleFactor] {
    RATIOS
}

/// Whether `ratio` has a kernel.
pub fn supports_ratio(ratio: ScaleFactor) -> bool {
    RATIOS.contains(&ratio)
}

/// Output sizes reachable from a `width` x `height` source.
///
/// Ratios larger than the source in either dimension are left out.
pub fn target_sizes(width: u32, height: u32) -> Vec<(u32, u32)> {
    RATIOS
        .iter()
        .filter_map(|r| r.downscaled(width, height))
        .collect()
}
