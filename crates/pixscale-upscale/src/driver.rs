//! Upscale driver
//!
//! Walks every source pixel, builds its [`NeighborWindow`] and lets the
//! kernel write one output block. The destination is split into bands of
//! `SCALE_Y` rows; each band belongs to exactly one source row, so bands
//! can be filled independently (in parallel with the `parallel` feature).

use std::sync::atomic::{AtomicBool, Ordering};

use pixscale_core::{
    ColorPipeline, Decode, DecodedImage, Encode, Equality, Error, Lerp, Metric, Project, Raster,
    RasterView, RasterViewMut, ScaleFactor, UpscaleKernel, WorkColor,
};

use crate::algorithm::Algorithm;
use crate::config::KernelConfig;
use crate::dispatch::{UpscaleVisitor, dispatch_upscale};
use crate::error::{UpscaleError, UpscaleResult};

/// Run one kernel over `src`, writing into `dst`.
///
/// `dst` must be exactly `SCALE_X * width` x `SCALE_Y * height`. The
/// optional `cancel` flag is polled once per source row; when it is set the
/// call returns [`UpscaleError::Cancelled`] and rows already written stay
/// in `dst`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `dst` has the wrong size and
/// [`UpscaleError::Cancelled`] if `cancel` was raised.
pub fn upscale_with<K, W, S, T, D, P, E>(
    kernel: &T,
    src: &RasterView<'_, S>,
    pipeline: &ColorPipeline<D, P, E>,
    dst: &mut RasterViewMut<'_, S>,
    cancel: Option<&AtomicBool>,
) -> UpscaleResult<()>
where
    K: Copy + Send + Sync,
    W: Copy + Send + Sync,
    S: Copy + Send + Sync,
    T: UpscaleKernel<K, W>,
    D: Decode<S, W>,
    P: Project<W, K>,
    E: Encode<W, S>,
{
    let (width, height) = src.size();
    let factor = ScaleFactor {
        x: T::SCALE_X as u32,
        y: T::SCALE_Y as u32,
    };
    let expected = factor
        .upscaled(width, height)
        .ok_or(Error::InvalidDimension { width, height })?;
    if dst.size() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: dst.size(),
        }
        .into());
    }

    log::debug!(
        "upscaling {width}x{height} -> {}x{} (radius {})",
        expected.0,
        expected.1,
        T::RADIUS
    );

    let image = DecodedImage::decode(src, &pipeline.decoder, &pipeline.projector);
    let stride = dst.stride();
    let band = stride * T::SCALE_Y;
    let encoder = &pipeline.encoder;

    let fill_band = |y: usize, chunk: &mut [S]| -> UpscaleResult<()> {
        if cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
            log::warn!("upscale cancelled at source row {y}");
            return Err(UpscaleError::Cancelled);
        }
        for x in 0..width as usize {
            let window = image.window(x, y);
            kernel.scale(&window, &mut chunk[x * T::SCALE_X..], stride, encoder);
        }
        Ok(())
    };

    let data = dst.pixels_mut();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        data.par_chunks_mut(band)
            .enumerate()
            .try_for_each(|(y, chunk)| fill_band(y, chunk))
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (y, chunk) in data.chunks_mut(band).enumerate() {
            fill_band(y, chunk)?;
        }
        Ok(())
    }
}

/// Upscaler bound to one algorithm, scale and kernel configuration.
///
/// Construction validates the combination, so every later call only fails
/// on raster geometry or cancellation.
#[derive(Debug, Clone)]
pub struct Upscaler<Q, M, L> {
    algorithm: Algorithm,
    scale: ScaleFactor,
    config: KernelConfig<Q, M, L>,
}

impl<Q, M, L> Upscaler<Q, M, L> {
    /// Create an upscaler.
    ///
    /// # Errors
    ///
    /// Returns [`UpscaleError::UnsupportedScale`] when `algorithm` has no
    /// kernel for `scale`.
    pub fn new(
        algorithm: Algorithm,
        scale: ScaleFactor,
        config: KernelConfig<Q, M, L>,
    ) -> UpscaleResult<Self> {
        if !algorithm.supports(scale) {
            return Err(UpscaleError::UnsupportedScale { algorithm, scale });
        }
        Ok(Self {
            algorithm,
            scale,
            config,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    pub fn config(&self) -> &KernelConfig<Q, M, L> {
        &self.config
    }

    /// Output size for a `width` x `height` source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the result overflows `u32`.
    pub fn target_size(&self, width: u32, height: u32) -> UpscaleResult<(u32, u32)> {
        self.scale
            .upscaled(width, height)
            .ok_or_else(|| Error::InvalidDimension { width, height }.into())
    }

    /// Upscale `src` into a newly allocated raster.
    pub fn upscale<K, W, S, D, P, E>(
        &self,
        src: &RasterView<'_, S>,
        pipeline: &ColorPipeline<D, P, E>,
    ) -> UpscaleResult<Raster<S>>
    where
        K: Copy + Send + Sync,
        W: WorkColor + Send + Sync,
        S: Copy + Default + Send + Sync,
        Q: Equality<K> + Clone,
        M: Metric<K> + Clone,
        L: Lerp<W> + Clone,
        D: Decode<S, W>,
        P: Project<W, K>,
        E: Encode<W, S>,
    {
        let (w, h) = self.target_size(src.width(), src.height())?;
        let mut out = Raster::new(w, h, S::default())?;
        self.upscale_into::<K, W, S, D, P, E>(src, pipeline, &mut out.view_mut(), None)?;
        Ok(out)
    }

    /// Upscale `src` into a caller-provided destination.
    ///
    /// See [`upscale_with`] for the size requirement and cancellation.
    pub fn upscale_into<K, W, S, D, P, E>(
        &self,
        src: &RasterView<'_, S>,
        pipeline: &ColorPipeline<D, P, E>,
        dst: &mut RasterViewMut<'_, S>,
        cancel: Option<&AtomicBool>,
    ) -> UpscaleResult<()>
    where
        K: Copy + Send + Sync,
        W: WorkColor + Send + Sync,
        S: Copy + Send + Sync,
        Q: Equality<K> + Clone,
        M: Metric<K> + Clone,
        L: Lerp<W> + Clone,
        D: Decode<S, W>,
        P: Project<W, K>,
        E: Encode<W, S>,
    {
        let job = IntoJob {
            src,
            pipeline,
            dst,
            cancel,
        };
        dispatch_upscale::<K, W, _, _, _, _>(self.algorithm, self.scale, &self.config, job)?
    }
}

/// Visitor running [`upscale_with`] on the dispatched kernel.
struct IntoJob<'a, 's, 'd, S, D, P, E> {
    src: &'a RasterView<'s, S>,
    pipeline: &'a ColorPipeline<D, P, E>,
    dst: &'a mut RasterViewMut<'d, S>,
    cancel: Option<&'a AtomicBool>,
}

impl<K, W, S, D, P, E> UpscaleVisitor<K, W> for IntoJob<'_, '_, '_, S, D, P, E>
where
    K: Copy + Send + Sync,
    W: Copy + Send + Sync,
    S: Copy + Send + Sync,
    D: Decode<S, W>,
    P: Project<W, K>,
    E: Encode<W, S>,
{
    type Output = UpscaleResult<()>;

    fn visit<T: UpscaleKernel<K, W>>(self, kernel: T) -> Self::Output {
        upscale_with(&kernel, self.src, self.pipeline, self.dst, self.cancel)
    }
}
