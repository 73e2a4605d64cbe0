//! Downscale driver
//!
//! Decodes the source once into a Work plane, then fills each destination
//! row from one band of `RATIO_Y` source rows. Columns and rows past the
//! last whole block are dropped.

use std::sync::atomic::{AtomicBool, Ordering};

use pixscale_core::{
    Decode, DownscaleKernel, Encode, Error, Plane, Raster, RasterView, RasterViewMut, ScaleFactor,
    SourceBlock, WorkColor,
};

use crate::boxavg::supports_ratio;
use crate::dispatch::{DownscaleVisitor, dispatch_downscale};
use crate::error::{DownscaleError, DownscaleResult};

/// Run one kernel over `src`, writing into `dst`.
///
/// `dst` must be exactly `floor(width / RATIO_X)` x
/// `floor(height / RATIO_Y)`. The `cancel` flag is polled once per
/// destination row.
///
/// # Errors
///
/// Returns [`DownscaleError::SourceTooSmall`] if the source holds no whole
/// block, [`Error::DimensionMismatch`] if `dst` has the wrong size and
/// [`DownscaleError::Cancelled`] if `cancel` was raised.
pub fn downscale_with<W, S, T, D, E>(
    kernel: &T,
    src: &RasterView<'_, S>,
    decoder: &D,
    encoder: &E,
    dst: &mut RasterViewMut<'_, S>,
    cancel: Option<&AtomicBool>,
) -> DownscaleResult<()>
where
    W: Copy + Send + Sync,
    S: Copy + Send + Sync,
    T: DownscaleKernel<W>,
    D: Decode<S, W>,
    E: Encode<W, S>,
{
    let (width, height) = src.size();
    let ratio = ScaleFactor {
        x: T::RATIO_X as u32,
        y: T::RATIO_Y as u32,
    };
    let expected = ratio
        .downscaled(width, height)
        .ok_or(DownscaleError::SourceTooSmall {
            width,
            height,
            ratio,
        })?;
    if dst.size() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: dst.size(),
        }
        .into());
    }

    log::debug!(
        "downscaling {width}x{height} -> {}x{} (ratio {ratio})",
        expected.0,
        expected.1
    );

    let plane = Plane::map_view(src, |p| decoder.decode(p));
    let out_width = expected.0 as usize;
    let stride = dst.stride();

    let fill_row = |y: usize, row: &mut [S]| -> DownscaleResult<()> {
        if cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
            log::warn!("downscale cancelled at row {y}");
            return Err(DownscaleError::Cancelled);
        }
        for (x, px) in row[..out_width].iter_mut().enumerate() {
            let block = SourceBlock::new(&plane, x * T::RATIO_X, y * T::RATIO_Y);
            *px = kernel.average(&block, encoder);
        }
        Ok(())
    };

    let data = dst.pixels_mut();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        data.par_chunks_mut(stride)
            .enumerate()
            .try_for_each(|(y, row)| fill_row(y, row))
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in data.chunks_mut(stride).enumerate() {
            fill_row(y, row)?;
        }
        Ok(())
    }
}

/// Box downscaler bound to one ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Downscaler {
    ratio: ScaleFactor,
}

impl Downscaler {
    /// Create a downscaler.
    ///
    /// # Errors
    ///
    /// Returns [`DownscaleError::UnsupportedRatio`] unless `ratio` is a
    /// square ratio from 2 to 5.
    pub fn new(ratio: ScaleFactor) -> DownscaleResult<Self> {
        if !supports_ratio(ratio) {
            return Err(DownscaleError::UnsupportedRatio { ratio });
        }
        Ok(Self { ratio })
    }

    pub fn ratio(&self) -> ScaleFactor {
        self.ratio
    }

    /// Output size for a `width` x `height` source.
    ///
    /// # Errors
    ///
    /// Returns [`DownscaleError::SourceTooSmall`] if either dimension is
    /// smaller than the ratio.
    pub fn target_size(&self, width: u32, height: u32) -> DownscaleResult<(u32, u32)> {
        self.ratio
            .downscaled(width, height)
            .ok_or(DownscaleError::SourceTooSmall {
                width,
                height,
                ratio: self.ratio,
            })
    }

    /// Downscale `src` into a newly allocated raster.
    pub fn downscale<W, S, D, E>(
        &self,
        src: &RasterView<'_, S>,
        decoder: &D,
        encoder: &E,
    ) -> DownscaleResult<Raster<S>>
    where
        W: WorkColor + Send + Sync,
        S: Copy + Default + Send + Sync,
        D: Decode<S, W>,
        E: Encode<W, S>,
    {
        let (w, h) = self.target_size(src.width(), src.height())?;
        let mut out = Raster::new(w, h, S::default())?;
        self.downscale_into::<W, S, D, E>(src, decoder, encoder, &mut out.view_mut(), None)?;
        Ok(out)
    }

    /// Downscale `src` into a caller-provided destination.
    ///
    /// See [`downscale_with`] for the size requirement and cancellation.
    pub fn downscale_into<W, S, D, E>(
        &self,
        src: &RasterView<'_, S>,
        decoder: &D,
        encoder: &E,
        dst: &mut RasterViewMut<'_, S>,
        cancel: Option<&AtomicBool>,
    ) -> DownscaleResult<()>
    where
        W: WorkColor + Send + Sync,
        S: Copy + Send + Sync,
        D: Decode<S, W>,
        E: Encode<W, S>,
    {
        let job = IntoJob {
            src,
            decoder,
            encoder,
            dst,
            cancel,
        };
        dispatch_downscale::<W, _>(self.ratio, job)?
    }
}

struct IntoJob<'a, 's, 'd, S, D, E> {
    src: &'a RasterView<'s, S>,
    decoder: &'a D,
    encoder: &'a E,
    dst: &'a mut RasterViewMut<'d, S>,
    cancel: Option<&'a AtomicBool>,
}

impl<W, S, D, E> DownscaleVisitor<W> for IntoJob<'_, '_, '_, S, D, E>
where
    W: Copy + Send + Sync,
    S: Copy + Send + Sync,
    D: Decode<S, W>,
    E: Encode<W, S>,
{
    type Output = DownscaleResult<()>;

    fn visit<T: DownscaleKernel<W>>(self, kernel: T) -> Self::Output {
        downscale_with(&kernel, self.src, self.decoder, self.encoder, self.dst, self.cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxavg::BoxDownscale;
    use pixscale_core::{PackRgba8, UnpackRgba8};

    #[test]
    fn test_remainder_is_dropped() {
        // 5x3 at ratio 2: the last column and row are ignored
        let src = Raster::from_fn(5, 3, |x, y| {
            if x == 4 || y == 2 { 0xffffffff } else { 0x000000ff }
        })
        .unwrap();
        let down = Downscaler::new(ScaleFactor::uniform(2)).unwrap();
        let out = down.downscale(&src.view(), &UnpackRgba8, &PackRgba8).unwrap();
        assert_eq!(out.size(), (2, 1));
        assert!(out.pixels().all(|p| p == 0x000000ff));
    }

    #[test]
    fn test_source_too_small() {
        let src = Raster::new(3, 8, 0u32).unwrap();
        let down = Downscaler::new(ScaleFactor::uniform(4)).unwrap();
        let err = down.downscale(&src.view(), &UnpackRgba8, &PackRgba8).unwrap_err();
        assert!(matches!(err, DownscaleError::SourceTooSmall { width: 3, height: 8, .. }));
    }

    #[test]
    fn test_dimension_mismatch() {
        let src = Raster::new(8, 8, 0u32).unwrap();
        let mut dst = Raster::new(3, 4, 0u32).unwrap();
        let err = downscale_with(
            &BoxDownscale::<2>,
            &src.view(),
            &UnpackRgba8,
            &PackRgba8,
            &mut dst.view_mut(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, DownscaleError::Core(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn test_cancel() {
        let src = Raster::new(8, 8, 0xff0000ffu32).unwrap();
        let mut dst = Raster::new(4, 4, 0u32).unwrap();
        let cancel = AtomicBool::new(true);
        let down = Downscaler::new(ScaleFactor::uniform(2)).unwrap();
        let err = down
            .downscale_into(&src.view(), &UnpackRgba8, &PackRgba8, &mut dst.view_mut(), Some(&cancel))
            .unwrap_err();
        assert!(matches!(err, DownscaleError::Cancelled));
        assert!(dst.pixels().all(|p| p == 0));
    }

    #[test]
    fn test_unsupported_ratio() {
        assert!(matches!(
            Downscaler::new(ScaleFactor::uniform(6)),
            Err(DownscaleError::UnsupportedRatio { .. })
        ));
        let d = Downscaler::new(ScaleFactor::uniform(3)).unwrap();
        assert_eq!(d.ratio(), ScaleFactor::uniform(3));
        assert_eq!(d.target_size(10, 9).unwrap(), (3, 3));
    }
}
