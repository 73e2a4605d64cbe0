//! pixscale-downscale - Box-averaging downscaler
//!
//! Reduces an image by an integer ratio from 2 to 5 on both axes. Every
//! output pixel is the equal-weight mean of one `N` x `N` source block,
//! computed in the Work color space of the chosen decoder.
//!
//! - [`BoxDownscale`] - the kernel
//! - [`supported_ratios`], [`supports_ratio`], [`target_sizes`] -
//!   capability queries
//! - [`dispatch_downscale`] - ratio to kernel type
//! - [`Downscaler`], [`downscale_with`] - whole-image drivers

mod boxavg;
pub mod dispatch;
pub mod driver;
mod error;

pub use boxavg::{BoxDownscale, supported_ratios, supports_ratio, target_sizes};
pub use dispatch::{DownscaleVisitor, dispatch_downscale};
pub use driver::{Downscaler, downscale_with};
pub use error::{DownscaleError, DownscaleResult};
