//! HQx pattern-table kernels
//!
//! Each source pixel is classified by an 8-bit pattern code (which of its
//! eight neighbors differ from it). The code, relabelled into a corner's
//! role frame, selects a rule from a static table; the rule's recipe says
//! how to mix role colors for each output cell of that corner.
//!
//! Supported block sizes: 2x2, 3x3 and 4x4. The LQx family and the 2x3
//! and 2x4 blocks have their own tuned tables and are not provided.

mod rules;
mod tables;

use pixscale_core::{
    Encode, Equality, Lerp, NeighborWindow, OutputBlock, UpscaleKernel,
};

use super::frame::{Frame, pattern_code};
use rules::{Rule, select};
use tables::{HQ2X, HQ3X_CORNER, HQ3X_EDGE, HQ4X};

/// HQx pattern-table upscaler producing `SX` x `SY` blocks.
#[derive(Debug, Clone)]
pub struct Hqx<Q, L, const SX: usize, const SY: usize> {
    equality: Q,
    lerp: L,
}

impl<Q, L, const SX: usize, const SY: usize> Hqx<Q, L, SX, SY> {
    /// Build the kernel from an equality over Key colors and a lerp over
    /// Work colors.
    pub fn new(equality: Q, lerp: L) -> Self {
        Self { equality, lerp }
    }
}

/// The classified 3x3 neighborhood of one source pixel.
struct Neighborhood<K, W> {
    keys: [K; 9],
    works: [W; 9],
    code: u8,
}

/// A rule resolved for one frame, ready to evaluate its recipes.
struct Resolved<W, const N: usize> {
    rule: &'static Rule<N>,
    works: [W; 9],
}

impl<Q, L, const SX: usize, const SY: usize> Hqx<Q, L, SX, SY> {
    #[inline]
    fn classify<K: Copy, W: Copy>(&self, window: &NeighborWindow<'_, K, W>) -> Neighborhood<K, W>
    where
        Q: Equality<K>,
    {
        let keys = window.keys3x3();
        let code = pattern_code(&keys, |a, b| self.equality.differs(a, b));
        Neighborhood {
            keys,
            works: window.works3x3(),
            code,
        }
    }

    #[inline]
    fn resolve<K: Copy, W: Copy, const N: usize>(
        &self,
        table: &'static [Rule<N>],
        n: &Neighborhood<K, W>,
        frame: Frame,
    ) -> Resolved<W, N>
    where
        Q: Equality<K>,
    {
        let keys = frame.pick(&n.keys);
        let rule = select(table, frame.relabel(n.code), |a, b| {
            self.equality.differs(keys[a as usize], keys[b as usize])
        });
        Resolved {
            rule,
            works: frame.pick(&n.works),
        }
    }

    #[inline]
    fn cook<W: Copy, const N: usize>(&self, r: &Resolved<W, N>, cell: usize) -> W
    where
        L: Lerp<W>,
    {
        r.rule.recipes[cell].eval(&r.works, &self.lerp)
    }

    /// HQ2x-style corner pixel for one mirror frame.
    #[inline]
    fn corner2<K: Copy, W: Copy>(&self, n: &Neighborhood<K, W>, frame: Frame) -> W
    where
        Q: Equality<K>,
        L: Lerp<W>,
    {
        let r = self.resolve(&HQ2X, n, frame);
        self.cook(&r, 0)
    }

    /// HQ3x-style pixel: `table` is the corner or the edge table.
    #[inline]
    fn cell3<K: Copy, W: Copy>(
        &self,
        table: &'static [Rule<1>],
        n: &Neighborhood<K, W>,
        frame: Frame,
    ) -> W
    where
        Q: Equality<K>,
        L: Lerp<W>,
    {
        let r = self.resolve(table, n, frame);
        self.cook(&r, 0)
    }
}

impl<Q, L, K, W> UpscaleKernel<K, W> for Hqx<Q, L, 2, 2>
where
    Q: Equality<K>,
    L: Lerp<W>,
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
        let n = self.classify(window);
        let mut out = OutputBlock::new(dst, dst_stride, encoder);
        for frame in Frame::MIRRORS {
            let (x, y) = frame.mirror_cell(0, 0, 2);
            out.put(x, y, self.corner2(&n, frame));
        }
    }
}

impl<Q, L, K, W> UpscaleKernel<K, W> for Hqx<Q, L, 3, 3>
where
    Q: Equality<K>,
    L: Lerp<W>,
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
        let n = self.classify(window);
        let mut out = OutputBlock::new(dst, dst_stride, encoder);
        for frame in Frame::TURNS {
            let corner = frame.0[0];
            let edge = frame.0[1];
            out.put(corner % 3, corner / 3, self.cell3(&HQ3X_CORNER, &n, frame));
            out.put(edge % 3, edge / 3, self.cell3(&HQ3X_EDGE, &n, frame));
        }
        out.put(1, 1, n.works[4]);
    }
}

impl<Q, L, K, W> UpscaleKernel<K, W> for Hqx<Q, L, 4, 4>
where
    Q: Equality<K>,
    L: Lerp<W>,
    K: Copy,
    W: Copy,
{
    const SCALE_X: usize = 4;
    const SCALE_Y: usize = 4;
    const RADIUS: i32 = 1;

    fn scale<S, E: Encode<W, S>>(
        &self,
        window: &NeighborWindow<'_, K, W>,
        dst: &mut [S],
        dst_stride: usize,
        encoder: &E,
    ) {
        let n = self.classify(window);
        let mut out = OutputBlock::new(dst, dst_stride, encoder);
        for frame in Frame::MIRRORS {
            let r = self.resolve(&HQ4X, &n, frame);
            for cy in 0..2 {
                for cx in 0..2 {
                    let (x, y) = frame.mirror_cell(cx, cy, 4);
                    out.put(x, y, self.cook(&r, cy * 2 + cx));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::testing::{scale_exact, scale_yuv};
    use pixscale_core::{ExactEquality, IntegerLerp, Raster, Rgba8, Yuv, YuvThreshold};
    use pixscale_test::fixtures::{self, BLACK, WHITE};

    type Hq2 = Hqx<ExactEquality, IntegerLerp, 2, 2>;

    fn dot() -> Raster<u32> {
        Raster::from_fn(3, 3, |x, y| if (x, y) == (1, 1) { WHITE } else { BLACK }).unwrap()
    }

    fn exact<const SX: usize, const SY: usize>(src: &Raster<u32>) -> Raster<u32>
    where
        Hqx<ExactEquality, IntegerLerp, SX, SY>: UpscaleKernel<Rgba8, Rgba8>,
    {
        scale_exact(&Hqx::<_, _, SX, SY>::new(ExactEquality, IntegerLerp), src)
    }

    #[test]
    fn test_flat_field_all_sizes() {
        let src = fixtures::solid(4, 3, 0x336699ff).unwrap();
        for out in [exact::<2, 2>(&src), exact::<3, 3>(&src), exact::<4, 4>(&src)] {
            assert!(out.pixels().all(|p| p == 0x336699ff));
        }
        assert_eq!(exact::<3, 3>(&src).size(), (12, 9));
    }

    #[test]
    fn test_isolated_dot_is_symmetric() {
        let src = dot();
        // Mirror frames keep 2x and 4x mirror-symmetric
        for out in [exact::<2, 2>(&src), exact::<4, 4>(&src)] {
            let (w, h) = out.size();
            for y in 0..h {
                for x in 0..w {
                    let p = out.get(x, y).unwrap();
                    assert_eq!(p, out.get(w - 1 - x, y).unwrap());
                    assert_eq!(p, out.get(x, h - 1 - y).unwrap());
                }
            }
        }
        // Turn frames keep 3x rotation-symmetric
        let out = exact::<3, 3>(&src);
        let (w, _) = out.size();
        for y in 0..w {
            for x in 0..w {
                let p = out.get(x, y).unwrap();
                assert_eq!(p, out.get(w - 1 - y, x).unwrap());
            }
        }
    }

    #[test]
    fn test_isolated_dot_hq2x_corner() {
        // Every neighbor differs: code 0xff, the (0x2f, 0x2f) rule gives
        // 14:1:1 of white, black, black.
        let out = exact::<2, 2>(&dot());
        let expected = Rgba8::new(223, 223, 223, 255).to_u32();
        for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            assert_eq!(out.get(x, y), Some(expected));
        }
    }

    #[test]
    fn test_hq3x_center_is_source() {
        let src = fixtures::palette_noise(6, 5, &fixtures::PALETTE, 7).unwrap();
        let out = exact::<3, 3>(&src);
        for y in 0..5 {
            for x in 0..6 {
                assert_eq!(out.get(3 * x + 1, 3 * y + 1), src.get(x, y));
            }
        }
    }

    #[test]
    fn test_blending_disabled_keeps_palette() {
        use pixscale_core::BlendGate;
        let src = fixtures::palette_noise(8, 8, &fixtures::PALETTE, 3).unwrap();
        let k = Hqx::<_, _, 4, 4>::new(ExactEquality, BlendGate::new(IntegerLerp, false));
        let out = scale_exact(&k, &src);
        assert!(out.pixels().all(|p| fixtures::PALETTE.contains(&p)));
    }

    struct AllEqual;

    impl Equality<Yuv> for AllEqual {
        fn equals(&self, _: Yuv, _: Yuv) -> bool {
            true
        }
    }

    #[test]
    fn test_yuv_threshold_merges_near_colors() {
        // Two nearly identical colors classify as one flat region
        let src = fixtures::checkerboard(4, 4, 1, 0x808080ff, 0x828282ff).unwrap();
        let near = scale_yuv(&Hqx::<_, _, 2, 2>::new(YuvThreshold::default(), IntegerLerp), &src);
        let flat = scale_yuv(&Hqx::<_, _, 2, 2>::new(AllEqual, IntegerLerp), &src);
        assert_eq!(near, flat);
        // Interior corners blend 2:1:1 with the two other-colored cardinals
        assert_eq!(near.get(3, 3), Some(0x818181ff));
    }

    #[test]
    fn test_deterministic() {
        let src = fixtures::palette_noise(7, 7, &fixtures::PALETTE, 11).unwrap();
        let k = Hq2::new(ExactEquality, IntegerLerp);
        assert_eq!(scale_exact(&k, &src), scale_exact(&k, &src));
    }
}
