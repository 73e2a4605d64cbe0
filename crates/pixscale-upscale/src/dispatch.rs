//! Runtime selection of a concrete kernel type
//!
//! Kernels are distinct monomorphized types; the algorithm and scale are
//! only known at runtime. [`dispatch_upscale`] bridges the two: it picks
//! the kernel type for `(algorithm, scale)`, builds it from a
//! [`KernelConfig`], and hands it to a caller-supplied [`UpscaleVisitor`]
//! whose generic `visit` is instantiated once per kernel type.

use pixscale_core::{Equality, Lerp, Metric, ScaleFactor, UpscaleKernel, WorkColor};

use crate::algorithm::Algorithm;
use crate::config::KernelConfig;
use crate::error::{UpscaleError, UpscaleResult};
use crate::kernels::{Eagle, Epx, EpxC, Hqx, Mmpx, ReverseAa, Sai2x, ScaleNx, Xbr};

/// Generic continuation receiving the selected kernel.
pub trait UpscaleVisitor<K, W> {
    type Output;

    fn visit<T: UpscaleKernel<K, W>>(self, kernel: T) -> Self::Output;
}

/// Build the kernel for `algorithm` at `scale` and pass it to `visitor`.
///
/// # Errors
///
/// Returns [`UpscaleError::UnsupportedScale`] if the algorithm has no
/// kernel for `scale`. The visitor is not called in that case.
pub fn dispatch_upscale<K, W, Q, M, L, V>(
    algorithm: Algorithm,
    scale: ScaleFactor,
    config: &KernelConfig<Q, M, L>,
    visitor: V,
) -> UpscaleResult<V::Output>
where
    K: Copy,
    W: WorkColor,
    Q: Equality<K> + Clone,
    M: Metric<K> + Clone,
    L: Lerp<W> + Clone,
    V: UpscaleVisitor<K, W>,
{
    log::debug!("dispatching {algorithm} at {scale}");

    let eq = || config.equality.clone();
    let metric = || config.metric.clone();
    let lerp = || config.gated_lerp();
    let variant = config.xbr_variant;

    let out = match (algorithm, scale.x, scale.y) {
        (Algorithm::Hqx, 2, 2) => visitor.visit(Hqx::<_, _, 2, 2>::new(eq(), lerp())),
        (Algorithm::Hqx, 3, 3) => visitor.visit(Hqx::<_, _, 3, 3>::new(eq(), lerp())),
        (Algorithm::Hqx, 4, 4) => visitor.visit(Hqx::<_, _, 4, 4>::new(eq(), lerp())),
        (Algorithm::Xbr, 2, 2) => {
            visitor.visit(Xbr::<_, _, _, 2>::new(eq(), metric(), lerp(), variant))
        }
        (Algorithm::Xbr, 3, 3) => {
            visitor.visit(Xbr::<_, _, _, 3>::new(eq(), metric(), lerp(), variant))
        }
        (Algorithm::Xbr, 4, 4) => {
            visitor.visit(Xbr::<_, _, _, 4>::new(eq(), metric(), lerp(), variant))
        }
        (Algorithm::Eagle, 2, 2) => visitor.visit(Eagle::<_, 2>::new(eq())),
        (Algorithm::Eagle, 3, 3) => visitor.visit(Eagle::<_, 3>::new(eq())),
        (Algorithm::Epx, 2, 2) => visitor.visit(Epx::new(eq(), lerp())),
        (Algorithm::EpxC, 2, 2) => visitor.visit(EpxC::new(eq(), lerp())),
        (Algorithm::ScaleNx, 2, 2) => visitor.visit(ScaleNx::<_, _, 2>::new(eq(), lerp())),
        (Algorithm::ScaleNx, 3, 3) => visitor.visit(ScaleNx::<_, _, 3>::new(eq(), lerp())),
        (Algorithm::Sai2x, 2, 2) => visitor.visit(Sai2x::new(eq(), lerp())),
        (Algorithm::Mmpx, 2, 2) => visitor.visit(Mmpx::new(eq())),
        (Algorithm::ReverseAa, 2, 2) => visitor.visit(ReverseAa::new(config.allow_blending)),
        _ => return Err(UpscaleError::UnsupportedScale { algorithm, scale }),
    };
    Ok(out)
}
