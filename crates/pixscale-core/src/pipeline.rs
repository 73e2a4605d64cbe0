//! Color pipeline functors
//!
//! A scaling pass is parameterized by three pure functors chosen once per
//! image:
//!
//! - [`Decode`]: Storage pixel to Work color
//! - [`Project`]: Work color to Key color (used only for comparisons)
//! - [`Encode`]: Work color back to a Storage pixel
//!
//! Kernels only see Work and Key values, so comparisons can run in a
//! perceptual space while blending runs in a linear one without any kernel
//! knowing which spaces are in use.

use crate::color::{Rgba8, Rgbaf, WorkColor, Yuv, compose_rgba, extract_rgba};

/// Storage to Work conversion.
pub trait Decode<S, W>: Sync {
    fn decode(&self, pixel: S) -> W;
}

/// Work to Key projection.
pub trait Project<W, K>: Sync {
    fn project(&self, color: W) -> K;
}

/// Work to Storage conversion.
pub trait Encode<W, S>: Sync {
    fn encode(&self, color: W) -> S;
}

/// `0xRRGGBBAA` to [`Rgba8`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnpackRgba8;

impl Decode<u32, Rgba8> for UnpackRgba8 {
    #[inline]
    fn decode(&self, pixel: u32) -> Rgba8 {
        Rgba8::from_u32(pixel)
    }
}

/// [`Rgba8`] to `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackRgba8;

impl Encode<Rgba8, u32> for PackRgba8 {
    #[inline]
    fn encode(&self, color: Rgba8) -> u32 {
        color.to_u32()
    }
}

/// `0xRRGGBBAA` to [`Rgbaf`] without a transfer curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnpackRgbaf;

impl Decode<u32, Rgbaf> for UnpackRgbaf {
    #[inline]
    fn decode(&self, pixel: u32) -> Rgbaf {
        Rgbaf::from_normalized(Rgba8::from_u32(pixel).normalized())
    }
}

/// [`Rgbaf`] to `0xRRGGBBAA` without a transfer curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackRgbaf;

impl Encode<Rgbaf, u32> for PackRgbaf {
    #[inline]
    fn encode(&self, color: Rgbaf) -> u32 {
        Rgba8::from_normalized(color.normalized()).to_u32()
    }
}

/// sRGB electro-optical transfer function on a `0.0..=1.0` value.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse of [`srgb_to_linear`].
#[inline]
pub fn linear_to_srgb(l: f32) -> f32 {
    if l <= 0.003_130_8 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// sRGB-encoded `0xRRGGBBAA` to linear-light [`Rgbaf`].
///
/// Alpha is stored linearly and passes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SrgbToLinear;

impl Decode<u32, Rgbaf> for SrgbToLinear {
    #[inline]
    fn decode(&self, pixel: u32) -> Rgbaf {
        let (r, g, b, a) = extract_rgba(pixel);
        Rgbaf::new(
            srgb_to_linear(r as f32 / 255.0),
            srgb_to_linear(g as f32 / 255.0),
            srgb_to_linear(b as f32 / 255.0),
            a as f32 / 255.0,
        )
    }
}

/// Linear-light [`Rgbaf`] to sRGB-encoded `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearToSrgb;

impl Encode<Rgbaf, u32> for LinearToSrgb {
    #[inline]
    fn encode(&self, color: Rgbaf) -> u32 {
        let to8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        compose_rgba(
            to8(linear_to_srgb(color.r.clamp(0.0, 1.0))),
            to8(linear_to_srgb(color.g.clamp(0.0, 1.0))),
            to8(linear_to_srgb(color.b.clamp(0.0, 1.0))),
            to8(color.a),
        )
    }
}

/// Compare Work colors directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProject;

impl<W: Copy> Project<W, W> for IdentityProject {
    #[inline]
    fn project(&self, color: W) -> W {
        color
    }
}

/// RGB to luma/chroma on the 0..255 scale, as used by the HQx family.
#[inline]
pub fn rgb_to_yuv(r: f32, g: f32, b: f32, a: f32) -> Yuv {
    Yuv {
        y: 0.299 * r + 0.587 * g + 0.114 * b,
        u: -0.169 * r - 0.331 * g + 0.5 * b + 128.0,
        v: 0.5 * r - 0.419 * g - 0.081 * b + 128.0,
        a,
    }
}

/// Any Work color to [`Yuv`], reading its channels as R, G, B, A.
#[derive(Debug, Clone, Copy, Default)]
pub struct YuvProject;

impl<W: WorkColor> Project<W, Yuv> for YuvProject {
    #[inline]
    fn project(&self, color: W) -> Yuv {
        let n = color.normalized();
        rgb_to_yuv(n[0] * 255.0, n[1] * 255.0, n[2] * 255.0, n[3] * 255.0)
    }
}

/// Linear-light [`Rgbaf`] to [`Yuv`] of its sRGB encoding.
///
/// Lets kernels blend in linear light while comparing on the same scale as
/// [`YuvProject`] does for 8-bit input.
#[derive(Debug, Clone, Copy, Default)]
pub struct SrgbYuvProject;

impl Project<Rgbaf, Yuv> for SrgbYuvProject {
    #[inline]
    fn project(&self, color: Rgbaf) -> Yuv {
        let enc = |v: f32| linear_to_srgb(v.clamp(0.0, 1.0)) * 255.0;
        rgb_to_yuv(enc(color.r), enc(color.g), enc(color.b), color.a * 255.0)
    }
}

/// The three functors of one scaling pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorPipeline<D, P, E> {
    pub decoder: D,
    pub projector: P,
    pub encoder: E,
}

impl<D, P, E> ColorPipeline<D, P, E> {
    /// Bundle a decoder, projector and encoder.
    pub fn new(decoder: D, projector: P, encoder: E) -> Self {
        Self {
            decoder,
            projector,
            encoder,
        }
    }
}

impl ColorPipeline<UnpackRgba8, IdentityProject, PackRgba8> {
    /// 8-bit RGBA in and out, exact channel comparison.
    pub fn rgba8_exact() -> Self {
        Self::new(UnpackRgba8, IdentityProject, PackRgba8)
    }
}

impl ColorPipeline<UnpackRgba8, YuvProject, PackRgba8> {
    /// 8-bit RGBA in and out, comparisons in YUV.
    pub fn rgba8_yuv() -> Self {
        Self::new(UnpackRgba8, YuvProject, PackRgba8)
    }
}

impl ColorPipeline<SrgbToLinear, SrgbYuvProject, LinearToSrgb> {
    /// Blend in linear light, compare in YUV of the sRGB encoding.
    pub fn linear_yuv() -> Self {
        Self::new(SrgbToLinear, SrgbYuvProject, LinearToSrgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba8_round_trip() {
        let p = ColorPipeline::rgba8_exact();
        for pixel in [0u32, 0xffffffff, 0x12345678, 0x80ff0040] {
            let w = p.decoder.decode(pixel);
            assert_eq!(p.encoder.encode(w), pixel);
            assert_eq!(p.projector.project(w), w);
        }
    }

    #[test]
    fn test_rgbaf_round_trip() {
        for v in 0..=255u8 {
            let pixel = compose_rgba(v, 255 - v, v / 2, 255);
            assert_eq!(PackRgbaf.encode(UnpackRgbaf.decode(pixel)), pixel);
        }
    }

    #[test]
    fn test_srgb_round_trip_all_levels() {
        for v in 0..=255u8 {
            let pixel = compose_rgba(v, v, v, v);
            let lin = SrgbToLinear.decode(pixel);
            assert_eq!(LinearToSrgb.encode(lin), pixel, "level {}", v);
        }
    }

    #[test]
    fn test_srgb_midpoint_is_darker_in_linear() {
        let lin = SrgbToLinear.decode(compose_rgba(128, 128, 128, 255));
        assert!(lin.r > 0.2 && lin.r < 0.23);
    }

    #[test]
    fn test_yuv_projection() {
        let white = YuvProject.project(Rgba8::rgb(255, 255, 255));
        assert!((white.y - 255.0).abs() < 0.01);
        assert!((white.u - 128.0).abs() < 0.5);
        assert!((white.v - 128.0).abs() < 0.5);

        let black = YuvProject.project(Rgba8::rgb(0, 0, 0));
        assert_eq!(black.y, 0.0);
        assert_eq!(black.u, 128.0);

        // Same color through both projections lands on the same key
        let c = 0x3366ccffu32;
        let a = YuvProject.project(UnpackRgba8.decode(c));
        let b = SrgbYuvProject.project(SrgbToLinear.decode(c));
        assert!((a.y - b.y).abs() < 0.05);
        assert!((a.u - b.u).abs() < 0.05);
        assert!((a.v - b.v).abs() < 0.05);
    }
}
