//! xBR edge-direction kernel
//!
//! Each output block starts as the center color. The bottom-right corner
//! rule is then evaluated four times, once per quarter turn, and may blend
//! the cells nearest that corner towards a neighbor color.
//!
//! The rule only fires across a real edge (center differs from both the
//! right and the bottom neighbor). Two weighted distance sums compare the
//! edge running along the corner with the edge running across it; the
//! slope of the winning edge decides which cells are painted.
//!
//! Neighbor names for the bottom-right corner (`E` is the center):
//!
//! ```text
//!        B1 C1
//!     A  B  C  C4
//!  D0 D  E  F  F4
//!     G  H  I  I4
//!        H5 I5
//! ```

use pixscale_core::{Encode, Equality, Lerp, Metric, NeighborWindow, OutputBlock, UpscaleKernel};

use crate::config::XbrVariant;

/// xBR kernel producing `N` x `N` blocks (`N` = 2, 3 or 4).
#[derive(Debug, Clone)]
pub struct Xbr<Q, M, L, const N: usize> {
    equality: Q,
    metric: M,
    lerp: L,
    variant: XbrVariant,
}

impl<Q, M, L, const N: usize> Xbr<Q, M, L, N> {
    pub fn new(equality: Q, metric: M, lerp: L, variant: XbrVariant) -> Self {
        Self {
            equality,
            metric,
            lerp,
            variant,
        }
    }

    pub fn variant(&self) -> XbrVariant {
        self.variant
    }
}

/// Which cells a firing corner paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// Shallow and steep at once.
    LeftUp,
    /// Shallow edge (run 2, rise 1).
    Left,
    /// Steep edge (run 1, rise 2).
    Up,
    /// 45 degree edge.
    Diagonal,
    /// Edge detected but not confirmed: soften the outer cell only.
    Soft,
}

#[derive(Debug, Clone, Copy)]
struct Hit<W> {
    px: W,
    shape: Shape,
}

/// Offset `(x, y)` turned `rot` quarter turns.
#[inline]
const fn rotate(rot: usize, x: i32, y: i32) -> (i32, i32) {
    match rot & 3 {
        0 => (x, y),
        1 => (y, -x),
        2 => (-x, -y),
        _ => (-y, x),
    }
}

/// Output block addressed in bottom-right-corner coordinates.
struct Cells<'a, W, L, const N: usize> {
    block: &'a mut [[W; N]; N],
    rot: usize,
    lerp: &'a L,
}

impl<W: Copy, L: Lerp<W>, const N: usize> Cells<'_, W, L, N> {
    #[inline]
    fn locate(&self, cx: usize, cy: usize) -> (usize, usize) {
        let n = N as i32 - 1;
        let (u, v) = rotate(self.rot, 2 * cx as i32 - n, 2 * cy as i32 - n);
        (((u + n) / 2) as usize, ((v + n) / 2) as usize)
    }

    #[inline]
    fn get(&self, cx: usize, cy: usize) -> W {
        let (x, y) = self.locate(cx, cy);
        self.block[y][x]
    }

    #[inline]
    fn set(&mut self, cx: usize, cy: usize, color: W) {
        let (x, y) = self.locate(cx, cy);
        self.block[y][x] = color;
    }

    /// Move cell `(cx, cy)` `alpha`/256 of the way towards `px`.
    #[inline]
    fn blend(&mut self, cx: usize, cy: usize, px: W, alpha: u32) {
        let (x, y) = self.locate(cx, cy);
        let dst = self.block[y][x];
        self.block[y][x] = self.lerp.lerp2((dst, 256 - alpha), (px, alpha));
    }

    #[inline]
    fn copy(&mut self, from: (usize, usize), to: (usize, usize)) {
        let c = self.get(from.0, from.1);
        self.set(to.0, to.1, c);
    }
}

impl<Q, M, L, const N: usize> Xbr<Q, M, L, N> {
    /// Evaluate the bottom-right corner rule turned `rot` quarter turns.
    fn corner<K: Copy, W: Copy>(&self, window: &NeighborWindow<'_, K, W>, rot: usize) -> Option<Hit<W>>
    where
        Q: Equality<K>,
        M: Metric<K>,
    {
        let key = |dx, dy| {
            let (x, y) = rotate(rot, dx, dy);
            window.key(x, y)
        };
        let eq = |a, b| self.equality.equals(a, b);
        let df = |a, b| self.metric.distance(a, b);

        let pe = key(0, 0);
        let pf = key(1, 0);
        let ph = key(0, 1);
        if eq(pe, ph) || eq(pe, pf) {
            return None;
        }

        let pb = key(0, -1);
        let pc = key(1, -1);
        let pd = key(-1, 0);
        let pg = key(-1, 1);
        let pi = key(1, 1);
        let f4 = key(2, 0);
        let i4 = key(2, 1);
        let h5 = key(0, 2);
        let i5 = key(1, 2);

        let e = df(pe, pc) + df(pe, pg) + df(pi, h5) + df(pi, f4) + 4.0 * df(ph, pf);
        let i = df(ph, pd) + df(ph, i5) + df(pf, i4) + df(pf, pb) + 4.0 * df(pe, pi);

        let px = {
            let (x, y) = if df(pe, pf) <= df(pe, ph) {
                rotate(rot, 1, 0)
            } else {
                rotate(rot, 0, 1)
            };
            window.work(x, y)
        };
        let ke = df(pf, pg);
        let ki = df(ph, pc);

        let shape = match self.variant {
            XbrVariant::Original => {
                if e >= i {
                    return None;
                }
                slope(2.0 * ke <= ki, ke >= 2.0 * ki)
            }
            XbrVariant::Revised => {
                if e > i {
                    return None;
                }
                let guard = (!eq(pf, pb) && !eq(ph, pd))
                    || (eq(pe, pi) && !eq(pf, i4) && !eq(ph, i5))
                    || eq(pe, pg)
                    || eq(pe, pc);
                if e < i && guard {
                    let left = 2.0 * ke <= ki && !eq(pe, pg) && !eq(pd, pg);
                    let up = ke >= 2.0 * ki && !eq(pe, pc) && !eq(pb, pc);
                    slope(left, up)
                } else {
                    Shape::Soft
                }
            }
        };
        Some(Hit { px, shape })
    }

    /// Center-filled block with all four corners applied in turn.
    #[inline]
    fn block<K: Copy, W: Copy>(
        &self,
        window: &NeighborWindow<'_, K, W>,
        paint: impl Fn(&mut Cells<'_, W, L, N>, Hit<W>),
    ) -> [[W; N]; N]
    where
        Q: Equality<K>,
        M: Metric<K>,
        L: Lerp<W>,
    {
        let mut block = [[window.center(); N]; N];
        for rot in 0..4 {
            if let Some(hit) = self.corner(window, rot) {
                let mut cells = Cells {
                    block: &mut block,
                    rot,
                    lerp: &self.lerp,
                };
                paint(&mut cells, hit);
            }
        }
        block
    }
}

#[inline]
fn slope(left: bool, up: bool) -> Shape {
    match (left, up) {
        (true, true) => Shape::LeftUp,
        (true, false) => Shape::Left,
        (false, true) => Shape::Up,
        (false, false) => Shape::Diagonal,
    }
}

fn paint2<W: Copy, L: Lerp<W>>(c: &mut Cells<'_, W, L, 2>, hit: Hit<W>) {
    let px = hit.px;
    match hit.shape {
        Shape::LeftUp => {
            c.blend(1, 1, px, 224);
            c.blend(0, 1, px, 64);
            c.copy((0, 1), (1, 0));
        }
        Shape::Left => {
            c.blend(1, 1, px, 192);
            c.blend(0, 1, px, 64);
        }
        Shape::Up => {
            c.blend(1, 1, px, 192);
            c.blend(1, 0, px, 64);
        }
        Shape::Diagonal | Shape::Soft => c.blend(1, 1, px, 128),
    }
}

fn paint3<W: Copy, L: Lerp<W>>(c: &mut Cells<'_, W, L, 3>, hit: Hit<W>) {
    let px = hit.px;
    match hit.shape {
        Shape::LeftUp => {
            c.blend(1, 2, px, 192);
            c.blend(0, 2, px, 64);
            c.copy((1, 2), (2, 1));
            c.copy((0, 2), (2, 0));
            c.set(2, 2, px);
        }
        Shape::Left => {
            c.blend(1, 2, px, 192);
            c.blend(2, 1, px, 64);
            c.blend(0, 2, px, 64);
            c.set(2, 2, px);
        }
        Shape::Up => {
            c.blend(2, 1, px, 192);
            c.blend(1, 2, px, 64);
            c.blend(2, 0, px, 64);
            c.set(2, 2, px);
        }
        Shape::Diagonal => {
            c.blend(2, 2, px, 224);
            c.blend(2, 1, px, 32);
            c.blend(1, 2, px, 32);
        }
        Shape::Soft => c.blend(2, 2, px, 128),
    }
}

fn paint4<W: Copy, L: Lerp<W>>(c: &mut Cells<'_, W, L, 4>, hit: Hit<W>) {
    let px = hit.px;
    match hit.shape {
        Shape::LeftUp => {
            c.blend(1, 3, px, 192);
            c.blend(0, 3, px, 64);
            c.set(3, 3, px);
            c.set(2, 3, px);
            c.set(3, 2, px);
            c.copy((0, 3), (2, 2));
            c.copy((0, 3), (3, 0));
            c.copy((1, 3), (3, 1));
        }
        Shape::Left => {
            c.blend(3, 2, px, 192);
            c.blend(1, 3, px, 192);
            c.blend(2, 2, px, 64);
            c.blend(0, 3, px, 64);
            c.set(2, 3, px);
            c.set(3, 3, px);
        }
        Shape::Up => {
            c.blend(2, 3, px, 192);
            c.blend(3, 1, px, 192);
            c.blend(2, 2, px, 64);
            c.blend(3, 0, px, 64);
            c.set(3, 2, px);
            c.set(3, 3, px);
        }
        Shape::Diagonal => {
            c.blend(3, 2, px, 128);
            c.blend(2, 3, px, 128);
            c.set(3, 3, px);
        }
        Shape::Soft => c.blend(3, 3, px, 128),
    }
}

impl<Q, M, L, K, W> UpscaleKernel<K, W> for Xbr<Q, M, L, 2>
where
    Q: Equality<K>,
    M: Metric<K>,
    L: Lerp<W>,
    K: Copy,
    W: Copy,
{
    const SCALE_X: usize = 2;
    const SCALE_Y: usize = 2;
    const RADIUS: i32 = 2;

    fn scale<S, E: Encode<W, S>>(
        &self,
        window: &NeighborWindow<'_, K, W>,
        dst: &mut [S],
        dst_stride: usize,
        encoder: &E,
    ) {
        let block = self.block(window, paint2);
        OutputBlock::new(dst, dst_stride, encoder).put_all(&block);
    }
}

impl<Q, M, L, K, W> UpscaleKernel<K, W> for Xbr<Q, M, L, 3>
where
    Q: Equality<K>,
    M: Metric<K>,
    L: Lerp<W>,
    K: Copy,
    W: Copy,
{
    const SCALE_X: usize = 3;
    const SCALE_Y: usize = 3;
    const RADIUS: i32 = 2;

    fn scale<S, E: Encode<W, S>>(
        &self,
        window: &NeighborWindow<'_, K, W>,
        dst: &mut [S],
        dst_stride: usize,
        encoder: &E,
    ) {
        let block = self.block(window, paint3);
        OutputBlock::new(dst, dst_stride, encoder).put_all(&block);
    }
}

impl<Q, M, L, K, W> UpscaleKernel<K, W> for Xbr<Q, M, L, 4>
where
    Q: Equality<K>,
    M: Metric<K>,
    L: Lerp<W>,
    K: Copy,
    W: Copy,
{
    const SCALE_X: usize = 4;
    const SCALE_Y: usize = 4;
    const RADIUS: i32 = 2;

    fn scale<S, E: Encode<W, S>>(
        &self,
        window: &NeighborWindow<'_, K, W>,
        dst: &mut [S],
        dst_stride: usize,
        encoder: &E,
    ) {
        let block = self.block(window, paint4);
        OutputBlock::new(dst, dst_stride, encoder).put_all(&block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::testing::{assert_flat, scale_exact, scale_yuv};
    use pixscale_core::{
        BlendGate, ExactEquality, IntegerLerp, ManhattanMetric, Raster, YuvMetric, YuvThreshold,
    };
    use pixscale_test::fixtures::{self, BLACK, WHITE};

    fn exact<const N: usize>(variant: XbrVariant) -> Xbr<ExactEquality, ManhattanMetric, IntegerLerp, N> {
        Xbr::new(ExactEquality, ManhattanMetric, IntegerLerp, variant)
    }

    fn dot() -> Raster<u32> {
        Raster::from_fn(5, 5, |x, y| if (x, y) == (2, 2) { WHITE } else { BLACK }).unwrap()
    }

    #[test]
    fn test_rotate_cycles() {
        for rot in 0..4 {
            let (x, y) = rotate(rot, 1, 2);
            assert_eq!(x * x + y * y, 5);
        }
        assert_eq!(rotate(1, 1, 0), (0, -1));
        assert_eq!(rotate(3, 1, 0), (0, 1));
    }

    #[test]
    fn test_flat_field() {
        for v in [XbrVariant::Original, XbrVariant::Revised] {
            assert_flat(&exact::<2>(v));
            assert_flat(&exact::<3>(v));
            assert_flat(&exact::<4>(v));
        }
    }

    #[test]
    fn test_isolated_dot_softens_corners() {
        // Every corner fires but fails the guard: outer cells blend 1:1
        let out = scale_exact(&exact::<2>(XbrVariant::Revised), &dot());
        for (x, y) in [(4, 4), (5, 4), (4, 5), (5, 5)] {
            assert_eq!(out.get(x, y), Some(0x808080ff));
        }

        let out = scale_exact(&exact::<3>(XbrVariant::Revised), &dot());
        assert_eq!(out.get(7, 7), Some(WHITE));
        assert_eq!(out.get(7, 6), Some(WHITE));
        for (x, y) in [(6, 6), (8, 6), (6, 8), (8, 8)] {
            assert_eq!(out.get(x, y), Some(0x808080ff));
        }
    }

    #[test]
    fn test_blending_disabled_keeps_palette() {
        let src = fixtures::palette_noise(9, 9, &fixtures::PALETTE, 5).unwrap();
        for v in [XbrVariant::Original, XbrVariant::Revised] {
            let k = Xbr::<_, _, _, 4>::new(
                ExactEquality,
                ManhattanMetric,
                BlendGate::new(IntegerLerp, false),
                v,
            );
            let out = scale_exact(&k, &src);
            assert!(out.pixels().all(|p| fixtures::PALETTE.contains(&p)));
        }
    }

    #[test]
    fn test_edges_only_touch_nearby_cells() {
        // Far from the stair edge the source color survives unchanged
        let src = fixtures::staircase(12, 12, 1, 2, WHITE, BLACK).unwrap();
        let k = Xbr::<_, _, _, 2>::new(YuvThreshold::default(), YuvMetric, IntegerLerp, XbrVariant::Revised);
        let out = scale_yuv(&k, &src);
        assert_eq!(out.get(0, 22), src.get(0, 11));
        assert_eq!(out.get(22, 0), src.get(11, 0));
        assert_eq!(out.size(), (24, 24));
    }

    #[test]
    fn test_variants_differ_on_dot() {
        let a = scale_exact(&exact::<2>(XbrVariant::Original), &dot());
        let b = scale_exact(&exact::<2>(XbrVariant::Revised), &dot());
        assert_ne!(a, b);
    }
}
