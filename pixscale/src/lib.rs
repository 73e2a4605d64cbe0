//! pixscale - Pixel-art image scaling for Rust
//!
//! # Overview
//!
//! pixscale upscales small pixel-art images with edge-aware kernels and
//! reduces them with a box filter:
//!
//! - Pattern tables (HQx) at 2x, 3x and 4x
//! - xBR at 2x, 3x and 4x
//! - Eagle, EPX, EPX-C, Scale2x / Scale3x, 2xSaI and MMPX
//! - Reverse anti-aliasing
//! - Box downscaling by 2 to 5
//!
//! Kernels are generic over the Work color they blend in, the Key color
//! they compare, and the comparison and blending rules, so the same kernel
//! runs on exact RGBA, on YUV thresholds, or in linear light.
//!
//! # Example
//!
//! ```
//! use pixscale::upscale::{Algorithm, KernelConfig, Upscaler};
//! use pixscale::{ColorPipeline, Raster, ScaleFactor};
//!
//! let src = Raster::new(16, 16, 0xff8800ffu32).unwrap();
//! let up = Upscaler::new(Algorithm::Hqx, ScaleFactor::uniform(3), KernelConfig::yuv()).unwrap();
//! let out = up.upscale(&src.view(), &ColorPipeline::rgba8_yuv()).unwrap();
//! assert_eq!(out.size(), (48, 48));
//! ```

// Re-export core types (colors, pipeline, rasters, kernel contracts)
pub use pixscale_core::*;

// Re-export the scaler crates as modules
pub use pixscale_downscale as downscale;
pub use pixscale_upscale as upscale;
