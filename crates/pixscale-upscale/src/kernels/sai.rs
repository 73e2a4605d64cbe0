//! 2xSaI (2x Scale and Interpolation)
//!
//! Neighborhood, with `A` the center:
//!
//! ```text
//! I E F J
//! G A B K
//! H C D L
//! M N O
//! ```
//!
//! The top-left output is always `A`. The other three cells depend on which
//! diagonals of the `A B / C D` square match. When both do, a concordance
//! score over the surrounding pairs decides the bottom-right cell.

use pixscale_core::{Encode, Equality, Lerp, NeighborWindow, OutputBlock, UpscaleKernel};

/// 2xSaI kernel.
#[derive(Debug, Clone)]
pub struct Sai2x<Q, L> {
    equality: Q,
    lerp: L,
}

impl<Q, L> Sai2x<Q, L> {
    pub fn new(equality: Q, lerp: L) -> Self {
        Self { equality, lerp }
    }
}

/// `+1` when `c` and `d` do not both match `a`, `-1` when they do not
/// both match `b`; the two cancel.
#[inline]
fn concordance<K: Copy, Q: Equality<K>>(eq: &Q, a: K, b: K, c: K, d: K) -> i32 {
    let not_a = !(eq.equals(a, c) && eq.equals(a, d));
    let not_b = !(eq.equals(b, c) && eq.equals(b, d));
    i32::from(not_a) - i32::from(not_b)
}

/// Which source color, or which blend, an output cell takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick {
    A,
    B,
    C,
    /// 1:1 of A and B.
    AB,
    /// 1:1 of A and C.
    AC,
    /// 1:1:1:1 of A, B, C and D.
    Quad,
}

impl<Q, L> Sai2x<Q, L> {
    /// Picks for the top-right, bottom-left and bottom-right cells.
    fn classify<K: Copy, W: Copy>(&self, window: &NeighborWindow<'_, K, W>) -> [Pick; 3]
    where
        Q: Equality<K>,
    {
        let key = |dx, dy| window.key(dx, dy);
        let eq = |x, y| self.equality.equals(x, y);

        let (i, e, f, j) = (key(-1, -1), key(0, -1), key(1, -1), key(2, -1));
        let (g, a, b, k) = (key(-1, 0), key(0, 0), key(1, 0), key(2, 0));
        let (h, c, d, l) = (key(-1, 1), key(0, 1), key(1, 1), key(2, 1));
        let (m, n, o) = (key(-1, 2), key(0, 2), key(1, 2));

        if eq(a, d) && !eq(b, c) {
            let top = if (eq(a, e) && eq(b, l)) || (eq(a, c) && eq(a, f) && !eq(b, e) && eq(b, j)) {
                Pick::A
            } else {
                Pick::AB
            };
            let left = if (eq(a, g) && eq(c, o)) || (eq(a, b) && eq(a, h) && !eq(g, c) && eq(c, m)) {
                Pick::A
            } else {
                Pick::AC
            };
            [top, left, Pick::A]
        } else if eq(b, c) && !eq(a, d) {
            let top = if (eq(b, f) && eq(a, h)) || (eq(b, e) && eq(b, d) && !eq(a, f) && eq(a, i)) {
                Pick::B
            } else {
                Pick::AB
            };
            let left = if (eq(c, h) && eq(a, f)) || (eq(c, g) && eq(c, d) && !eq(a, h) && eq(a, i)) {
                Pick::C
            } else {
                Pick::AC
            };
            [top, left, Pick::B]
        } else if eq(a, d) && eq(b, c) {
            if eq(a, b) {
                return [Pick::A; 3];
            }
            let eqf = &self.equality;
            let score = concordance(eqf, a, b, g, e)
                + concordance(eqf, b, a, k, f)
                + concordance(eqf, b, a, h, n)
                + concordance(eqf, a, b, l, o);
            let corner = match score {
                s if s > 0 => Pick::A,
                s if s < 0 => Pick::B,
                _ => Pick::Quad,
            };
            [Pick::AB, Pick::AC, corner]
        } else {
            let top = if eq(a, c) && eq(a, f) && !eq(b, e) && eq(b, j) {
                Pick::A
            } else if eq(b, e) && eq(b, d) && !eq(a, f) && eq(a, i) {
                Pick::B
            } else {
                Pick::AB
            };
            let left = if eq(a, b) && eq(a, h) && !eq(g, c) && eq(c, m) {
                Pick::A
            } else if eq(c, g) && eq(c, d) && !eq(a, h) && eq(a, i) {
                Pick::C
            } else {
                Pick::AC
            };
            [top, left, Pick::Quad]
        }
    }
}

impl<Q, L, K, W> UpscaleKernel<K, W> for Sai2x<Q, L>
where
    Q: Equality<K>,
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
        let [top, left, corner] = self.classify(window);
        let a = window.work(0, 0);
        let b = window.work(1, 0);
        let c = window.work(0, 1);
        let d = window.work(1, 1);
        let resolve = |p: Pick| match p {
            Pick::A => a,
            Pick::B => b,
            Pick::C => c,
            Pick::AB => self.lerp.lerp2((a, 1), (b, 1)),
            Pick::AC => self.lerp.lerp2((a, 1), (c, 1)),
            Pick::Quad => self.lerp.lerp4((a, 1), (b, 1), (c, 1), (d, 1)),
        };
        let mut out = OutputBlock::new(dst, dst_stride, encoder);
        out.put(0, 0, a);
        out.put(1, 0, resolve(top));
        out.put(0, 1, resolve(left));
        out.put(1, 1, resolve(corner));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::testing::{assert_flat, scale_exact};
    use pixscale_core::{BlendGate, ExactEquality, IntegerLerp};
    use pixscale_test::fixtures::{self, BLACK, WHITE};

    #[test]
    fn test_flat_field() {
        assert_flat(&Sai2x::new(ExactEquality, IntegerLerp));
    }

    #[test]
    fn test_concordance() {
        let eq = ExactEquality;
        assert_eq!(concordance(&eq, 1, 2, 1, 1), -1);
        assert_eq!(concordance(&eq, 1, 2, 2, 2), 1);
        assert_eq!(concordance(&eq, 1, 2, 1, 2), 0);
    }

    #[test]
    fn test_checkerboard_resolves_to_center() {
        // Both diagonals match; every concordance term favors A
        let src = fixtures::checkerboard(6, 6, 1, BLACK, WHITE).unwrap();
        let out = scale_exact(&Sai2x::new(ExactEquality, IntegerLerp), &src);
        let a = src.get(2, 2).unwrap();
        assert_eq!(out.get(4, 4), Some(a));
        assert_eq!(out.get(5, 5), Some(a));
        assert_eq!(out.get(5, 4), Some(0x808080ff));
        assert_eq!(out.get(4, 5), Some(0x808080ff));
    }

    #[test]
    fn test_top_left_is_source() {
        let src = fixtures::rgba_noise(7, 5, 9).unwrap();
        let out = scale_exact(&Sai2x::new(ExactEquality, IntegerLerp), &src);
        for y in 0..5 {
            for x in 0..7 {
                assert_eq!(out.get(2 * x, 2 * y), src.get(x, y));
            }
        }
    }

    #[test]
    fn test_blending_disabled_keeps_palette() {
        let src = fixtures::palette_noise(8, 8, &fixtures::PALETTE, 17).unwrap();
        let out = scale_exact(&Sai2x::new(ExactEquality, BlendGate::new(IntegerLerp, false)), &src);
        assert!(out.pixels().all(|p| fixtures::PALETTE.contains(&p)));
    }
}
