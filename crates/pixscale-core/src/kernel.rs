//! Kernel contracts
//!
//! An upscale kernel maps one [`NeighborWindow`] to a fixed
//! `SCALE_X` x `SCALE_Y` block of output pixels. A downscale kernel maps a
//! `RATIO_X` x `RATIO_Y` [`SourceBlock`] to one output pixel. Kernels are
//! pure: no state survives between invocations, so any number of them can
//! run concurrently over disjoint destination regions.

use std::fmt;

use crate::error::{Error, Result};
use crate::pipeline::Encode;
use crate::window::{NeighborWindow, SourceBlock};

/// Integer scale or ratio on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScaleFactor {
    pub x: u32,
    pub y: u32,
}

impl ScaleFactor {
    /// Create a factor, validating both components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if either component is zero.
    pub fn new(x: u32, y: u32) -> Result<Self> {
        if x == 0 || y == 0 {
            return Err(Error::InvalidParameter(format!(
                "scale factor must be positive, got {x}x{y}"
            )));
        }
        Ok(Self { x, y })
    }

    /// Same factor on both axes.
    pub const fn uniform(n: u32) -> Self {
        Self { x: n, y: n }
    }

    /// Whether both axes use the same factor.
    pub fn is_uniform(&self) -> bool {
        self.x == self.y
    }

    /// Size after multiplying by this factor, or `None` on overflow.
    pub fn upscaled(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        Some((width.checked_mul(self.x)?, height.checked_mul(self.y)?))
    }

    /// Size after dividing by this factor (floor). `None` when the result
    /// would be empty.
    pub fn downscaled(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        let (w, h) = (width / self.x, height / self.y);
        if w == 0 || h == 0 {
            return None;
        }
        Some((w, h))
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// Maps one source neighborhood to a `SCALE_X` x `SCALE_Y` output block.
pub trait UpscaleKernel<K, W>: Sync {
    /// Output columns per source pixel.
    const SCALE_X: usize;
    /// Output rows per source pixel.
    const SCALE_Y: usize;
    /// Largest neighbor offset the kernel reads (1 to 3).
    const RADIUS: i32;

    /// Write the output block for `window`.
    ///
    /// `dst[0]` is the top-left output pixel; row `r` of the block starts at
    /// `dst[r * dst_stride]`. Exactly `SCALE_X * SCALE_Y` pixels are written.
    fn scale<S, E: Encode<W, S>>(
        &self,
        window: &NeighborWindow<'_, K, W>,
        dst: &mut [S],
        dst_stride: usize,
        encoder: &E,
    );
}

/// Averages a `RATIO_X` x `RATIO_Y` source block into one output pixel.
pub trait DownscaleKernel<W>: Sync {
    /// Source columns per output pixel.
    const RATIO_X: usize;
    /// Source rows per output pixel.
    const RATIO_Y: usize;

    fn average<S, E: Encode<W, S>>(&self, block: &SourceBlock<'_, W>, encoder: &E) -> S;
}

/// Strided write target for one output block.
pub struct OutputBlock<'d, 'e, S, E> {
    dst: &'d mut [S],
    stride: usize,
    encoder: &'e E,
}

impl<'d, 'e, S, E> OutputBlock<'d, 'e, S, E> {
    #[inline]
    pub fn new(dst: &'d mut [S], stride: usize, encoder: &'e E) -> Self {
        Self {
            dst,
            stride,
            encoder,
        }
    }

    /// Encode `color` into block cell `(x, y)`.
    #[inline]
    pub fn put<W>(&mut self, x: usize, y: usize, color: W)
    where
        E: Encode<W, S>,
    {
        self.dst[y * self.stride + x] = self.encoder.encode(color);
    }

    /// Write a whole `NX` x `NY` block of Work colors.
    #[inline]
    pub fn put_all<W: Copy, const NX: usize, const NY: usize>(&mut self, block: &[[W; NX]; NY])
    where
        E: Encode<W, S>,
    {
        for (y, row) in block.iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                self.put(x, y, c);
            }
        }
    }

    /// Fill an `nx` x `ny` block with one color.
    #[inline]
    pub fn fill<W: Copy>(&mut self, nx: usize, ny: usize, color: W)
    where
        E: Encode<W, S>,
    {
        for y in 0..ny {
            for x in 0..nx {
                self.put(x, y, color);
            }
        }
    }
}
