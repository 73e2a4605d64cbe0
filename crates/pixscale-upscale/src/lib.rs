//! pixscale-upscale - Pixel-art upscaling kernels
//!
//! This crate provides the upscale side of pixscale:
//!
//! - Pattern tables: HQ2x / HQ3x / HQ4x
//! - xBR at 2x, 3x and 4x
//! - Eagle, EPX, EPX-C and Scale2x / Scale3x
//! - 2xSaI, MMPX and reverse anti-aliasing
//! - Capability queries ([`Algorithm::supported_scales`]) and runtime
//!   dispatch to the monomorphized kernel ([`dispatch_upscale`])
//! - A banded driver ([`upscale_with`], [`Upscaler`]) with optional
//!   cancellation and, behind the `parallel` feature, rayon
//!
//! # Example
//!
//! ```ignore
//! use pixscale_core::{ColorPipeline, ScaleFactor};
//! use pixscale_upscale::{Algorithm, KernelConfig, Upscaler};
//!
//! let up = Upscaler::new(Algorithm::Hqx, ScaleFactor::uniform(2), KernelConfig::yuv())?;
//! let out = up.upscale(&src.view(), &ColorPipeline::rgba8_yuv())?;
//! ```

pub mod algorithm;
pub mod config;
pub mod dispatch;
pub mod driver;
mod error;
pub mod kernels;

pub use algorithm::{Algorithm, Quality};
pub use config::{KernelConfig, XbrVariant};
pub use dispatch::{UpscaleVisitor, dispatch_upscale};
pub use driver::{Upscaler, upscale_with};
pub use error::{UpscaleError, UpscaleResult};
pub use kernels::{Eagle, Epx, EpxC, Hqx, Mmpx, ReverseAa, Sai2x, ScaleNx, Xbr};
