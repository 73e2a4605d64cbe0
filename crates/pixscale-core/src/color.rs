//! Color representations
//!
//! Three roles are kept apart:
//!
//! - *Storage* pixels are whatever the raster holds. The reference format is
//!   a packed `u32` laid out as `0xRRGGBBAA` (red in MSB, alpha in LSB).
//! - *Work* colors ([`WorkColor`]) carry the values kernels blend.
//! - *Key* colors are only ever compared (see [`crate::compare`]). They may be
//!   the Work type itself or a separate space such as [`Yuv`].

/// Red channel (MSB, byte 0)
pub const RED: usize = 0;
/// Green channel (byte 1)
pub const GREEN: usize = 1;
/// Blue channel (byte 2)
pub const BLUE: usize = 2;
/// Alpha channel (LSB, byte 3)
pub const ALPHA: usize = 3;

/// Shift amounts for extracting color channels
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// Extract red component from a 32-bit pixel.
#[inline]
pub fn red(pixel: u32) -> u8 {
    ((pixel >> RED_SHIFT) & 0xff) as u8
}

/// Extract green component from a 32-bit pixel.
#[inline]
pub fn green(pixel: u32) -> u8 {
    ((pixel >> GREEN_SHIFT) & 0xff) as u8
}

/// Extract blue component from a 32-bit pixel.
#[inline]
pub fn blue(pixel: u32) -> u8 {
    ((pixel >> BLUE_SHIFT) & 0xff) as u8
}

/// Extract alpha component from a 32-bit pixel.
#[inline]
pub fn alpha(pixel: u32) -> u8 {
    ((pixel >> ALPHA_SHIFT) & 0xff) as u8
}

/// Compose a 32-bit RGB pixel (alpha = 255).
#[inline]
pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
    compose_rgba(r, g, b, 255)
}

/// Compose a 32-bit RGBA pixel.
#[inline]
pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
        | ((a as u32) << ALPHA_SHIFT)
}

/// Extract RGBA values from a 32-bit pixel.
#[inline]
pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
    (red(pixel), green(pixel), blue(pixel), alpha(pixel))
}

/// A continuous color value kernels can blend.
///
/// Every Work color exposes exactly four channels in a fixed order
/// (red, green, blue, alpha, or the equivalent for non-RGB spaces).
/// `from_channels` is the single place where a blended result is brought
/// back into the representable range, so rounding is identical for every
/// kernel.
pub trait WorkColor: Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Largest nominal channel value (`255.0` for 8-bit, `1.0` for float).
    const CHANNEL_MAX: f32;

    /// Channel values in storage order.
    fn to_channels(self) -> [f32; 4];

    /// Build a color from (possibly out-of-range) channel values.
    fn from_channels(channels: [f32; 4]) -> Self;

    /// Channels scaled to `0.0..=1.0`.
    #[inline]
    fn normalized(self) -> [f32; 4] {
        let c = self.to_channels();
        let k = 1.0 / Self::CHANNEL_MAX;
        [c[0] * k, c[1] * k, c[2] * k, c[3] * k]
    }

    /// Inverse of [`WorkColor::normalized`].
    #[inline]
    fn from_normalized(n: [f32; 4]) -> Self {
        let k = Self::CHANNEL_MAX;
        Self::from_channels([n[0] * k, n[1] * k, n[2] * k, n[3] * k])
    }
}

/// 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Create a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpack a `0xRRGGBBAA` pixel.
    #[inline]
    pub fn from_u32(pixel: u32) -> Self {
        let (r, g, b, a) = extract_rgba(pixel);
        Self { r, g, b, a }
    }

    /// Pack into a `0xRRGGBBAA` pixel.
    #[inline]
    pub fn to_u32(self) -> u32 {
        compose_rgba(self.r, self.g, self.b, self.a)
    }
}

#[inline]
fn quantize_u8(v: f32) -> u8 {
    // NaN lands on 0 through the saturating cast
    v.round().clamp(0.0, 255.0) as u8
}

impl WorkColor for Rgba8 {
    const CHANNEL_MAX: f32 = 255.0;

    #[inline]
    fn to_channels(self) -> [f32; 4] {
        [self.r as f32, self.g as f32, self.b as f32, self.a as f32]
    }

    #[inline]
    fn from_channels(c: [f32; 4]) -> Self {
        Self {
            r: quantize_u8(c[0]),
            g: quantize_u8(c[1]),
            b: quantize_u8(c[2]),
            a: quantize_u8(c[3]),
        }
    }
}

/// Floating-point RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgbaf {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgbaf {
    /// Create a color from its four channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl WorkColor for Rgbaf {
    const CHANNEL_MAX: f32 = 1.0;

    #[inline]
    fn to_channels(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    fn from_channels(c: [f32; 4]) -> Self {
        Self {
            r: c[0].clamp(0.0, 1.0),
            g: c[1].clamp(0.0, 1.0),
            b: c[2].clamp(0.0, 1.0),
            a: c[3].clamp(0.0, 1.0),
        }
    }
}

/// Luma/chroma key color on the 0..255 scale.
///
/// `u` and `v` are offset by 128 so the whole space is non-negative.
/// Alpha is carried along so transparent and opaque pixels of the same
/// color compare as different.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Yuv {
    pub y: f32,
    pub u: f32,
    pub v: f32,
    pub a: f32,
}

impl Yuv {
    /// Create a key from its components.
    pub const fn new(y: f32, u: f32, v: f32, a: f32) -> Self {
        Self { y, u, v, a }
    }
}

impl WorkColor for Yuv {
    const CHANNEL_MAX: f32 = 255.0;

    #[inline]
    fn to_channels(self) -> [f32; 4] {
        [self.y, self.u, self.v, self.a]
    }

    #[inline]
    fn from_channels(c: [f32; 4]) -> Self {
        Self {
            y: c[0],
            u: c[1],
            v: c[2],
            a: c[3],
        }
    }
}
