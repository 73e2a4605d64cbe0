//! Upscale kernels
//!
//! Every kernel implements [`pixscale_core::UpscaleKernel`] for each block
//! size it supports. Kernels are plain values holding their comparison and
//! blending functors; they can be shared across threads.
//!
//! | Kernel | Block sizes | Radius |
//! |--------|-------------|--------|
//! | [`Hqx`] | 2x2, 3x3, 4x4 | 1 |
//! | [`Xbr`] | 2x2, 3x3, 4x4 | 2 |
//! | [`Eagle`] | 2x2, 3x3 | 1 |
//! | [`Epx`], [`EpxC`] | 2x2 | 1 |
//! | [`ScaleNx`] | 2x2, 3x3 | 1 |
//! | [`Sai2x`] | 2x2 | 2 |
//! | [`Mmpx`] | 2x2 | 3 |
//! | [`ReverseAa`] | 2x2 | 2 |

pub(crate) mod frame;

pub mod eagle;
pub mod epx;
pub mod mmpx;
pub mod pattern;
pub mod reverse_aa;
pub mod sai;
pub mod scalenx;
pub mod xbr;

pub use eagle::Eagle;
pub use epx::{Epx, EpxC};
pub use mmpx::Mmpx;
pub use pattern::Hqx;
pub use reverse_aa::ReverseAa;
pub use sai::Sai2x;
pub use scalenx::ScaleNx;
pub use xbr::Xbr;
