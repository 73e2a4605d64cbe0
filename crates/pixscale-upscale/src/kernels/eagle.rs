//! Eagle corner kernel
//!
//! Each output corner copies the diagonal neighbor when both cardinal
//! neighbors bridging the center to that diagonal equal it, and copies the
//! center otherwise. Eagle never blends.
//!
//! ```text
//! S T U      2x: TL = S if V == S == T
//! V C W      3x: corners as 2x, edges and middle are C
//! X Y Z
//! ```

use pixscale_core::{Encode, Equality, NeighborWindow, OutputBlock, UpscaleKernel};

use super::frame::Frame;

/// Eagle kernel producing `N` x `N` blocks (`N` = 2 or 3).
///
/// Follows the two-bridge rule: with S = T = V = X around center P only
/// the top-left corner qualifies, so the 2x block is `[X, P; P, P]`.
#[derive(Debug, Clone)]
pub struct Eagle<Q, const N: usize> {
    equality: Q,
}

impl<Q, const N: usize> Eagle<Q, N> {
    pub fn new(equality: Q) -> Self {
        Self { equality }
    }

    /// Top-left corner in role order.
    #[inline]
    fn corner<K: Copy, W: Copy>(&self, keys: &[K; 9], works: &[W; 9]) -> W
    where
        Q: Equality<K>,
    {
        let eq = |a: usize, b: usize| self.equality.equals(keys[a], keys[b]);
        if eq(1, 0) && eq(3, 0) {
            works[0]
        } else {
            works[4]
        }
    }
}

impl<Q, K, W> UpscaleKernel<K, W> for Eagle<Q, 2>
where
    Q: Equality<K>,
    K: Copy,
    W: Copy,
{
    const SCALE_X: usize = 2;
    const SCALE_Y: usize = 2;
    const RADIUS: i32 = 1;

    fn scale<S, E: Encode<W, S>>(
        &self,
        window: &NeighborWindow<'_, K, W>,
        dst: &mut [S],
        dst_stride: usize,
        encoder: &E,
    ) {
        let keys = window.keys3x3();
        let works = window.works3x3();
        let mut out = OutputBlock::new(dst, dst_stride, encoder);
        for frame in Frame::MIRRORS {
            let (x, y) = frame.mirror_cell(0, 0, 2);
            out.put(x, y, self.corner(&frame.pick(&keys), &frame.pick(&works)));
        }
    }
}

impl<Q, K, W> UpscaleKernel<K, W> for Eagle<Q, 3>
where
    Q: Equality<K>,
    K: Copy,
    W: Copy,
{
    const SCALE_X: usize = 3;
    const SCALE_Y: usize = 3;
    const RADIUS: i32 = 1;

    fn scale<S, E: Encode<W, S>>(
        &self,
        window: &NeighborWindow<'_, K, W>,
        dst: &mut [S],
        dst_stride: usize,
        encoder: &E,
    ) {
        let keys = window.keys3x3();
        let works = window.works3x3();
        let mut out = OutputBlock::new(dst, dst_stride, encoder);
        out.fill(3, 3, works[4]);
        for frame in Frame::TURNS {
            let cell = frame.0[0];
            out.put(cell % 3, cell / 3, self.corner(&frame.pick(&keys), &frame.pick(&works)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::testing::{assert_flat, scale_exact};
    use pixscale_core::{ExactEquality, Raster};
    use pixscale_test::fixtures::{self, BLUE, RED};

    #[test]
    fn test_flat_field() {
        assert_flat(&Eagle::<_, 2>::new(ExactEquality));
        assert_flat(&Eagle::<_, 3>::new(ExactEquality));
    }

    #[test]
    fn test_top_left_corner_rule() {
        // S, T and V are X; everything else is P
        let (x, p) = (RED, BLUE);
        let src = Raster::from_fn(3, 3, |cx, cy| match (cx, cy) {
            (0, 0) | (1, 0) | (0, 1) => x,
            _ => p,
        })
        .unwrap();
        let out = scale_exact(&Eagle::<_, 2>::new(ExactEquality), &src);
        assert_eq!(out.get(2, 2), Some(x));
        assert_eq!(out.get(3, 2), Some(p));
        assert_eq!(out.get(2, 3), Some(p));
        assert_eq!(out.get(3, 3), Some(p));

        let out = scale_exact(&Eagle::<_, 3>::new(ExactEquality), &src);
        assert_eq!(out.get(3, 3), Some(x));
        for (cx, cy) in [(4, 3), (5, 3), (3, 4), (4, 4), (5, 4), (3, 5), (4, 5), (5, 5)] {
            assert_eq!(out.get(cx, cy), Some(p));
        }
    }

    #[test]
    fn test_never_blends() {
        let src = fixtures::palette_noise(8, 6, &fixtures::PALETTE, 21).unwrap();
        for out in [
            scale_exact(&Eagle::<_, 2>::new(ExactEquality), &src),
            scale_exact(&Eagle::<_, 3>::new(ExactEquality), &src),
        ] {
            assert!(out.pixels().all(|c| fixtures::PALETTE.contains(&c)));
        }
    }
}
