//! Integer-weighted blending of Work colors
//!
//! Every blend is `Σ(w_i · v_i) / Σw_i` with small non-negative integer
//! weights. Terms are summed in operand order and divided once, so a blend
//! gives the same result on every platform.

use crate::color::{Rgba8, WorkColor};

/// Weighted combination of 2 to 4 Work colors.
///
/// Weights are non-negative and must not all be zero. Implementations stay
/// total when they are (the first operand is returned) so kernels never
/// fail.
pub trait Lerp<W>: Sync {
    /// Blend an arbitrary short list of `(color, weight)` pairs.
    fn blend(&self, parts: &[(W, u32)]) -> W;

    #[inline]
    fn lerp2(&self, a: (W, u32), b: (W, u32)) -> W {
        self.blend(&[a, b])
    }

    #[inline]
    fn lerp3(&self, a: (W, u32), b: (W, u32), c: (W, u32)) -> W {
        self.blend(&[a, b, c])
    }

    #[inline]
    fn lerp4(&self, a: (W, u32), b: (W, u32), c: (W, u32), d: (W, u32)) -> W {
        self.blend(&[a, b, c, d])
    }
}

impl<W, T: Lerp<W> + ?Sized> Lerp<W> for &T {
    #[inline]
    fn blend(&self, parts: &[(W, u32)]) -> W {
        (**self).blend(parts)
    }
}

/// Weighted mean with nearest rounding.
///
/// Works for any [`WorkColor`]; the result is rounded (and clamped) by the
/// color's own `from_channels`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerLerp;

impl<W: WorkColor> Lerp<W> for IntegerLerp {
    fn blend(&self, parts: &[(W, u32)]) -> W {
        debug_assert!(!parts.is_empty());
        let mut sum = [0.0f32; 4];
        let mut total = 0u32;
        for &(color, weight) in parts {
            let c = color.to_channels();
            let w = weight as f32;
            for i in 0..4 {
                sum[i] += w * c[i];
            }
            total += weight;
        }
        if total == 0 {
            return parts[0].0;
        }
        let t = total as f32;
        W::from_channels([sum[0] / t, sum[1] / t, sum[2] / t, sum[3] / t])
    }
}

/// Weighted mean with floor division on 8-bit channels.
///
/// Matches the shift-and-add arithmetic of the classic 8-bit scalers, which
/// always truncate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TruncatingLerp;

impl Lerp<Rgba8> for TruncatingLerp {
    fn blend(&self, parts: &[(Rgba8, u32)]) -> Rgba8 {
        debug_assert!(!parts.is_empty());
        let mut sum = [0u32; 4];
        let mut total = 0u32;
        for &(c, w) in parts {
            sum[0] += w * c.r as u32;
            sum[1] += w * c.g as u32;
            sum[2] += w * c.b as u32;
            sum[3] += w * c.a as u32;
            total += w;
        }
        if total == 0 {
            return parts[0].0;
        }
        Rgba8::new(
            (sum[0] / total) as u8,
            (sum[1] / total) as u8,
            (sum[2] / total) as u8,
            (sum[3] / total) as u8,
        )
    }
}

/// A [`Lerp`] that can be switched to nearest-neighbor selection.
///
/// When blending is disabled the operand with the largest weight is
/// returned unchanged (the first one on ties), so kernels only ever emit
/// colors already present in the source.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlendGate<L> {
    inner: L,
    enabled: bool,
}

impl<L> BlendGate<L> {
    /// Wrap `inner`; `enabled = false` turns every blend into a pick.
    pub fn new(inner: L, enabled: bool) -> Self {
        Self { inner, enabled }
    }

    /// Whether blends are forwarded to the inner lerp.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wrapped lerp.
    pub fn inner(&self) -> &L {
        &self.inner
    }
}

/// Operand with the largest weight, first one on ties.
#[inline]
pub fn dominant<W: Copy>(parts: &[(W, u32)]) -> W {
    let mut best = parts[0];
    for &p in &parts[1..] {
        if p.1 > best.1 {
            best = p;
        }
    }
    best.0
}

impl<W: Copy, L: Lerp<W>> Lerp<W> for BlendGate<L> {
    #[inline]
    fn blend(&self, parts: &[(W, u32)]) -> W {
        if self.enabled {
            self.inner.blend(parts)
        } else {
            dominant(parts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgbaf;

    #[test]
    fn test_integer_lerp_rgba8() {
        let a = Rgba8::new(0, 0, 0, 255);
        let b = Rgba8::new(255, 100, 3, 255);
        assert_eq!(IntegerLerp.lerp2((a, 1), (b, 1)), Rgba8::new(128, 50, 2, 255));
        assert_eq!(IntegerLerp.lerp2((a, 3), (b, 1)), Rgba8::new(64, 25, 1, 255));
        assert_eq!(IntegerLerp.lerp2((a, 0), (b, 1)), b);
    }

    #[test]
    fn test_truncating_lerp_rgba8() {
        let a = Rgba8::new(0, 0, 0, 255);
        let b = Rgba8::new(255, 100, 3, 255);
        assert_eq!(
            TruncatingLerp.lerp2((a, 1), (b, 1)),
            Rgba8::new(127, 50, 1, 255)
        );
        assert_eq!(
            TruncatingLerp.lerp3((a, 2), (b, 1), (b, 1)),
            Rgba8::new(127, 50, 1, 255)
        );
    }

    #[test]
    fn test_identical_operands() {
        let c = Rgba8::new(17, 99, 201, 128);
        assert_eq!(IntegerLerp.lerp4((c, 5), (c, 1), (c, 1), (c, 1)), c);
        assert_eq!(TruncatingLerp.lerp3((c, 14), (c, 1), (c, 1)), c);
        let f = Rgbaf::new(0.25, 0.5, 0.75, 1.0);
        assert_eq!(IntegerLerp.lerp2((f, 1), (f, 1)), f);
    }

    #[test]
    fn test_zero_weights_stay_total() {
        let a = Rgba8::rgb(1, 2, 3);
        let b = Rgba8::rgb(4, 5, 6);
        assert_eq!(IntegerLerp.lerp2((a, 0), (b, 0)), a);
        assert_eq!(TruncatingLerp.lerp2((a, 0), (b, 0)), a);
    }

    #[test]
    fn test_blend_gate() {
        let a = Rgba8::rgb(0, 0, 0);
        let b = Rgba8::rgb(200, 200, 200);
        let off = BlendGate::new(IntegerLerp, false);
        assert_eq!(off.lerp2((a, 1), (b, 3)), b);
        assert_eq!(off.lerp2((a, 1), (b, 1)), a);
        assert_eq!(off.lerp3((a, 1), (b, 1), (b, 2)), b);
        let on = BlendGate::new(IntegerLerp, true);
        assert_eq!(on.lerp2((a, 1), (b, 1)), Rgba8::rgb(100, 100, 100));
    }
}
