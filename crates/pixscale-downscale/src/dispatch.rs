//! Runtime selection of the box kernel for a ratio

use pixscale_core::{DownscaleKernel, ScaleFactor, WorkColor};

use crate::boxavg::BoxDownscale;
use crate::error::{DownscaleError, DownscaleResult};

/// Generic continuation receiving the selected kernel.
pub trait DownscaleVisitor<W> {
    type Output;

    fn visit<T: DownscaleKernel<W>>(self, kernel: T) -> Self::Output;
}

/// Pass the box kernel for `ratio` to `visitor`.
///
/// # Errors
///
/// Returns [`DownscaleError::UnsupportedRatio`] for anything but a square
/// ratio from 2 to 5.
pub fn dispatch_downscale<W, V>(ratio: ScaleFactor, visitor: V) -> DownscaleResult<V::Output>
where
    W: WorkColor,
    V: DownscaleVisitor<W>,
{
    log::debug!("dispatching box downscale at {ratio}");
    let out = match (ratio.x, ratio.y) {
        (2, 2) => visitor.visit(BoxDownscale::<2>),
        (3, 3) => visitor.visit(BoxDownscale::<3>),
        (4, 4) => visitor.visit(BoxDownscale::<4>),
        (5, 5) => visitor.visit(BoxDownscale::<5>),
        _ => return Err(DownscaleError::UnsupportedRatio { ratio }),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxavg::supported_ratios;
    use pixscale_core::Rgba8;

    struct Ratio;

    impl DownscaleVisitor<Rgba8> for Ratio {
        type Output = (usize, usize);

        fn visit<T: DownscaleKernel<Rgba8>>(self, _kernel: T) -> Self::Output {
            (T::RATIO_X, T::RATIO_Y)
        }
    }

    #[test]
    fn test_dispatch_every_ratio() {
        for &r in supported_ratios() {
            let (x, y) = dispatch_downscale(r, Ratio).unwrap();
            assert_eq!((x as u32, y as u32), (r.x, r.y));
        }
    }

    #[test]
    fn test_dispatch_rejects_others() {
        for r in [ScaleFactor::uniform(1), ScaleFactor::uniform(6), ScaleFactor::new(2, 4).unwrap()] {
            assert!(matches!(
                dispatch_downscale(r, Ratio),
                Err(DownscaleError::UnsupportedRatio { .. })
            ));
        }
    }
}
