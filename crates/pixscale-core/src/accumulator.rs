//! Weighted running sum for box averaging

use crate::color::WorkColor;

/// Running per-channel weighted sum of Work colors.
///
/// Created empty, filled with [`add`](Accumulator::add) /
/// [`add_weighted`](Accumulator::add_weighted), then consumed once by
/// [`finish`](Accumulator::finish). Sums are kept in `f64` so a block of up
/// to 5x5 samples is averaged without rounding in between.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    sum: [f64; 4],
    weight: u32,
}

impl Accumulator {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sample with weight 1.
    #[inline]
    pub fn add<W: WorkColor>(&mut self, color: W) {
        self.add_weighted(color, 1);
    }

    /// Add one sample with an integer weight.
    #[inline]
    pub fn add_weighted<W: WorkColor>(&mut self, color: W, weight: u32) {
        let c = color.to_channels();
        let w = weight as f64;
        for i in 0..4 {
            self.sum[i] += c[i] as f64 * w;
        }
        self.weight += weight;
    }

    /// Total weight added so far.
    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Normalized channel means. All zero when nothing was added.
    #[inline]
    pub fn mean(&self) -> [f64; 4] {
        if self.weight == 0 {
            return [0.0; 4];
        }
        let w = self.weight as f64;
        [
            self.sum[0] / w,
            self.sum[1] / w,
            self.sum[2] / w,
            self.sum[3] / w,
        ]
    }

    /// Consume the accumulator and return the weighted mean.
    #[inline]
    pub fn finish<W: WorkColor>(self) -> W {
        let m = self.mean();
        W::from_channels([m[0] as f32, m[1] as f32, m[2] as f32, m[3] as f32])
    }
}
