//! pixscale-core - Building blocks for pixel-art scalers
//!
//! This crate provides the pieces every scaling kernel is built from:
//!
//! - [`color`] - Storage packing helpers and the [`WorkColor`] types
//!   ([`Rgba8`], [`Rgbaf`]) plus the [`Yuv`] key
//! - [`pipeline`] - [`Decode`] / [`Project`] / [`Encode`] functors and
//!   [`ColorPipeline`]
//! - [`compare`] - [`Equality`] and [`Metric`] over Key colors
//! - [`lerp`] - integer-weighted blending ([`Lerp`], [`BlendGate`])
//! - [`raster`] - owned and borrowed pixel surfaces
//! - [`window`] - decoded planes, [`NeighborWindow`] and [`SourceBlock`]
//! - [`accumulator`] - weighted averaging for downscalers
//! - [`kernel`] - the [`UpscaleKernel`] / [`DownscaleKernel`] contracts
//!
//! # Data flow
//!
//! ```text
//! source raster -> Decode -> Project -> NeighborWindow
//!               -> kernel.scale(window) -> Work colors -> Encode -> destination
//! ```

pub mod accumulator;
pub mod color;
pub mod compare;
mod error;
pub mod kernel;
pub mod lerp;
pub mod pipeline;
pub mod raster;
pub mod window;

pub use accumulator::Accumulator;
pub use color::{Rgba8, Rgbaf, WorkColor, Yuv};
pub use compare::{
    Equality, EuclideanMetric, ExactEquality, ManhattanMetric, Metric, ThresholdEquality,
    YuvMetric, YuvThreshold,
};
pub use error::{Error, Result};
pub use kernel::{DownscaleKernel, OutputBlock, ScaleFactor, UpscaleKernel};
pub use lerp::{BlendGate, IntegerLerp, Lerp, TruncatingLerp};
pub use pipeline::{
    ColorPipeline, Decode, Encode, IdentityProject, LinearToSrgb, PackRgba8, PackRgbaf, Project,
    SrgbToLinear, SrgbYuvProject, UnpackRgba8, UnpackRgbaf, YuvProject,
};
pub use raster::{Raster, RasterView, RasterViewMut};
pub use window::{DecodedImage, NeighborWindow, Plane, SourceBlock};
