//! Reverse anti-aliasing (2x)
//!
//! Not an edge classifier: each channel is treated as a sampled signal and
//! split into two sub-samples along a tilt estimated from a 5-tap line.
//! The vertical pass splits the center into top and bottom halves using
//! the column `B1 B E H H5`; the horizontal pass then splits each half
//! into left and right using the row `D0 D E F F4`.
//!
//! The tilt is `(7 (b + c) - 3 (a + d)) / 16` over the four consecutive
//! differences, clamped so neither sub-sample overshoots the neighboring
//! samples or leaves `0..=1`.

use pixscale_core::{Encode, NeighborWindow, OutputBlock, UpscaleKernel, WorkColor};

/// Reverse-AA kernel.
#[derive(Debug, Clone, Copy)]
pub struct ReverseAa {
    allow_blending: bool,
}

impl ReverseAa {
    /// With `allow_blending` off the kernel degrades to nearest neighbor,
    /// since every sub-sample is a new color.
    pub fn new(allow_blending: bool) -> Self {
        Self { allow_blending }
    }
}

impl Default for ReverseAa {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Clamped tilt of sample `s` given two samples on each side.
#[inline]
fn tilt(p2: f32, p1: f32, s: f32, n1: f32, n2: f32) -> f32 {
    let a = p1 - p2;
    let b = s - p1;
    let c = n1 - s;
    let d = n2 - n1;
    let t = (7.0 * (b + c) - 3.0 * (a + d)) / 16.0;
    let headroom = if s < 0.5 { 2.0 * s } else { 2.0 * (1.0 - s) };
    let m = headroom.min(2.0 * b.abs()).min(2.0 * c.abs());
    t.clamp(-m, m)
}

/// Split `s` into its `(before, after)` sub-samples.
#[inline]
fn split(p2: f32, p1: f32, s: f32, n1: f32, n2: f32) -> (f32, f32) {
    let t = tilt(p2, p1, s, n1, n2);
    (s - t / 2.0, s + t / 2.0)
}

impl<K, W> UpscaleKernel<K, W> for ReverseAa
where
    K: Copy,
    W: WorkColor,
{
    const SCALE_X: usize = 2;
    const SCALE_Y: usize = 2;
    const RADIUS: i32 = 2;

    fn scale<S, E: Encode<W, S>>(
        &self,
        window: &NeighborWindow<'_, K, W>,
        dst: &mut [S],
        dst_stride: usize,
        encoder: &E,
    ) {
        let mut out = OutputBlock::new(dst, dst_stride, encoder);
        if !self.allow_blending {
            out.fill(2, 2, window.center());
            return;
        }

        let n = |dx, dy| window.work(dx, dy).normalized();
        let (b1, b, e, h, h5) = (n(0, -2), n(0, -1), n(0, 0), n(0, 1), n(0, 2));
        let (d0, d, f, f4) = (n(-2, 0), n(-1, 0), n(1, 0), n(2, 0));

        let mut cells = [[[0.0f32; 4]; 2]; 2];
        for ch in 0..4 {
            let (top, bottom) = split(b1[ch], b[ch], e[ch], h[ch], h5[ch]);
            for (row, v) in [top, bottom].into_iter().enumerate() {
                let (left, right) = split(d0[ch], d[ch], v, f[ch], f4[ch]);
                cells[row][0][ch] = left.clamp(0.0, 1.0);
                cells[row][1][ch] = right.clamp(0.0, 1.0);
            }
        }
        for (y, row) in cells.iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                out.put(x, y, W::from_normalized(c));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::testing::{assert_flat, scale_exact};
    use pixscale_core::{Raster, Rgba8};
    use pixscale_test::fixtures;

    fn gray(v: u8) -> u32 {
        Rgba8::rgb(v, v, v).to_u32()
    }

    #[test]
    fn test_flat_field() {
        assert_flat(&ReverseAa::default());
    }

    #[test]
    fn test_tilt_is_zero_on_flat_and_extremes() {
        assert_eq!(tilt(0.3, 0.3, 0.3, 0.3, 0.3), 0.0);
        // No headroom at 0 or 1
        assert_eq!(tilt(0.0, 0.0, 1.0, 1.0, 1.0), 0.0);
        assert_eq!(tilt(1.0, 1.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_ramp_is_resampled_linearly() {
        let src = Raster::from_fn(8, 3, |x, _| gray(32 * x as u8)).unwrap();
        let out = scale_exact(&ReverseAa::default(), &src);
        // Source pixel (3, 1) has value 96; sub-samples sit a quarter
        // pixel to either side.
        assert_eq!(out.get(6, 2), Some(gray(88)));
        assert_eq!(out.get(7, 2), Some(gray(104)));
        assert_eq!(out.get(6, 3), Some(gray(88)));
    }

    #[test]
    fn test_without_blending_is_nearest() {
        let src = fixtures::rgba_noise(6, 5, 4).unwrap();
        let out = scale_exact(&ReverseAa::new(false), &src);
        assert_eq!(out, fixtures::nearest_upsample(&src, 2, 2).unwrap());
    }
}
