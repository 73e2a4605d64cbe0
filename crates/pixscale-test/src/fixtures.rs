//! Synthetic source images
//!
//! All fixtures are `0xRRGGBBAA` rasters built from a handful of palette
//! colors, which is what pixel-art scalers are designed for.

use crate::error::{TestError, TestResult};
use pixscale_core::Raster;

/// Opaque black
pub const BLACK: u32 = 0x000000ff;
/// Opaque white
pub const WHITE: u32 = 0xffffffff;
/// Opaque red
pub const RED: u32 = 0xff0000ff;
/// Opaque green
pub const GREEN: u32 = 0x00ff00ff;
/// Opaque blue
pub const BLUE: u32 = 0x0000ffff;
/// Opaque yellow
pub const YELLOW: u32 = 0xffff00ff;
/// Fully transparent black
pub const CLEAR: u32 = 0x00000000;

/// A small palette with well separated colors
pub const PALETTE: [u32; 6] = [BLACK, WHITE, RED, GREEN, BLUE, YELLOW];

/// Uniform raster.
pub fn solid(width: u32, height: u32, color: u32) -> TestResult<Raster<u32>> {
    Ok(Raster::new(width, height, color)?)
}

/// Checkerboard of `cell` x `cell` squares starting with `a` at the origin.
pub fn checkerboard(width: u32, height: u32, cell: u32, a: u32, b: u32) -> TestResult<Raster<u32>> {
    if cell == 0 {
        return Err(TestError::InvalidFixture("cell size must be positive".into()));
    }
    Ok(Raster::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { a } else { b }
    })?)
}

/// One-pixel-wide 45 degree line (`x == y`) over a background.
pub fn diagonal_line(width: u32, height: u32, fg: u32, bg: u32) -> TestResult<Raster<u32>> {
    Ok(Raster::from_fn(width, height, |x, y| if x == y { fg } else { bg })?)
}

/// Filled region below a line of slope `rise` / `run` pixels.
///
/// With `rise = 1, run = 2` this is the classic 2:1 staircase.
pub fn staircase(
    width: u32,
    height: u32,
    rise: u32,
    run: u32,
    fg: u32,
    bg: u32,
) -> TestResult<Raster<u32>> {
    if run == 0 {
        return Err(TestError::InvalidFixture("run must be positive".into()));
    }
    Ok(Raster::from_fn(width, height, |x, y| {
        if y * run >= x * rise { fg } else { bg }
    })?)
}

/// Raster drawn as text, one string per row and one char per pixel.
///
/// Each char is looked up in `palette`. Rows must be non-empty and of
/// equal length.
pub fn from_art(rows: &[&str], palette: &[(char, u32)]) -> TestResult<Raster<u32>> {
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut pixels = Vec::with_capacity(width * rows.len());
    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() != width {
            return Err(TestError::InvalidFixture(format!("row {y} has a different width")));
        }
        for ch in row.chars() {
            let color = palette
                .iter()
                .find(|&&(c, _)| c == ch)
                .map(|&(_, color)| color)
                .ok_or_else(|| TestError::InvalidFixture(format!("'{ch}' is not in the palette")))?;
            pixels.push(color);
        }
    }
    Ok(Raster::from_vec(width as u32, rows.len() as u32, pixels)?)
}

/// Simple linear congruential generator for reproducible noise
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        // Knuth's MMIX constants
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    fn below(&mut self, n: usize) -> usize {
        ((self.next() >> 33) % n as u64) as usize
    }
}

/// Pixels drawn at random from `palette`, reproducible from `seed`.
pub fn palette_noise(width: u32, height: u32, palette: &[u32], seed: u64) -> TestResult<Raster<u32>> {
    if palette.is_empty() {
        return Err(TestError::InvalidFixture("palette must not be empty".into()));
    }
    let mut rng = SimpleRng::new(seed);
    Ok(Raster::from_fn(width, height, |_, _| palette[rng.below(palette.len())])?)
}

/// Arbitrary 8-bit RGBA noise, reproducible from `seed`.
pub fn rgba_noise(width: u32, height: u32, seed: u64) -> TestResult<Raster<u32>> {
    let mut rng = SimpleRng::new(seed);
    Ok(Raster::from_fn(width, height, |_, _| (rng.next() >> 32) as u32)?)
}

/// Nearest-neighbor upsample by an integer factor on each axis.
pub fn nearest_upsample(src: &Raster<u32>, fx: u32, fy: u32) -> TestResult<Raster<u32>> {
    if fx == 0 || fy == 0 {
        return Err(TestError::InvalidFixture("factor must be positive".into()));
    }
    let (w, h) = src.size();
    Ok(Raster::from_fn(w * fx, h * fy, |x, y| {
        src.row(y / fy)[(x / fx) as usize]
    })?)
}

/// Left-right mirror image.
pub fn mirror_horizontal(src: &Raster<u32>) -> TestResult<Raster<u32>> {
    let (w, h) = src.size();
    Ok(Raster::from_fn(w, h, |x, y| src.row(y)[(w - 1 - x) as usize])?)
}
