//! MMPX (2x)
//!
//! Layered copy rules over a 7x7 cross. Every output cell is one of the
//! source colors; MMPX never blends.
//!
//! ```text
//!          P3
//!          P
//!       A  B  C
//! Q3 Q  D  E  F  R  R3      output   J K
//!       G  H  I                      L M
//!          S
//!          S3
//! ```
//!
//! Layers, applied in order, each allowed to overwrite the previous:
//!
//! 1. 1:1 slopes: a corner takes the cardinal pair that meets across it.
//! 2. Intersections: a one-pixel line crossing a solid region, unless the
//!    line continues past the region (`P3`, `Q3`, `R3`, `S3`).
//! 3. Triangle tips: a darker pixel capping a solid wedge.
//! 4. 2:1 slopes: shallow and steep edges propagate along the block.
//!
//! This is McGuire and Gagiu's rule set as published; only equality is
//! pluggable. Brightness tie-breaks use `(r + g + b + 1) * (256 - a)` on
//! the 8-bit scale, so transparent pixels rank as bright.

use pixscale_core::{Encode, Equality, NeighborWindow, OutputBlock, UpscaleKernel, WorkColor};

/// MMPX kernel.
#[derive(Debug, Clone)]
pub struct Mmpx<Q> {
    equality: Q,
}

impl<Q> Mmpx<Q> {
    pub fn new(equality: Q) -> Self {
        Self { equality }
    }
}

#[inline]
fn luma<W: WorkColor>(w: W) -> f32 {
    let n = w.normalized();
    let (r, g, b, a) = (n[0] * 255.0, n[1] * 255.0, n[2] * 255.0, n[3] * 255.0);
    (r + g + b + 1.0) * (256.0 - a)
}

impl<Q> Mmpx<Q> {
    fn block<K: Copy, W: WorkColor>(&self, window: &NeighborWindow<'_, K, W>) -> [[W; 2]; 2]
    where
        Q: Equality<K>,
    {
        let key = |dx, dy| window.key(dx, dy);
        let key_far = |dx, dy| window.key_far(dx, dy);
        let work = |dx, dy| window.work(dx, dy);
        let eq = |x: K, y: K| self.equality.equals(x, y);
        let all2 = |x, a, b| eq(x, a) && eq(x, b);
        let all3 = |x, a, b, c| eq(x, a) && eq(x, b) && eq(x, c);
        let all4 = |x, a, b, c, d| eq(x, a) && eq(x, b) && eq(x, c) && eq(x, d);
        let any3 = |x, a, b, c| eq(x, a) || eq(x, b) || eq(x, c);
        let none2 = |x, a, b| !eq(x, a) && !eq(x, b);
        let none4 = |x, a, b, c, d| !eq(x, a) && !eq(x, b) && !eq(x, c) && !eq(x, d);

        let (a, b, c) = (key(-1, -1), key(0, -1), key(1, -1));
        let (d, e, f) = (key(-1, 0), key(0, 0), key(1, 0));
        let (g, h, i) = (key(-1, 1), key(0, 1), key(1, 1));

        let we = work(0, 0);
        let (mut j, mut k, mut l, mut m) = (we, we, we, we);

        if [a, b, c, d, f, g, h, i].iter().all(|&n| eq(n, e)) {
            return [[j, k], [l, m]];
        }

        let (p, q, r, s) = (key(0, -2), key(-2, 0), key(2, 0), key(0, 2));
        let (wb, wd, wf, wh) = (work(0, -1), work(-1, 0), work(1, 0), work(0, 1));
        let (bl, dl, el, fl, hl) = (luma(wb), luma(wd), luma(we), luma(wf), luma(wh));

        // 1:1 slopes
        if (eq(d, b) && !eq(d, h) && !eq(d, f))
            && (el >= dl || eq(e, a))
            && any3(e, a, c, g)
            && (el < dl || !eq(a, d) || !eq(e, p) || !eq(e, q))
        {
            j = wd;
        }
        if (eq(b, f) && !eq(b, d) && !eq(b, h))
            && (el >= bl || eq(e, c))
            && any3(e, a, c, i)
            && (el < bl || !eq(c, b) || !eq(e, p) || !eq(e, r))
        {
            k = wb;
        }
        if (eq(h, d) && !eq(h, f) && !eq(h, b))
            && (el >= hl || eq(e, g))
            && any3(e, a, g, i)
            && (el < hl || !eq(g, h) || !eq(e, s) || !eq(e, q))
        {
            l = wh;
        }
        if (eq(f, h) && !eq(f, b) && !eq(f, d))
            && (el >= fl || eq(e, i))
            && any3(e, c, g, i)
            && (el < fl || !eq(i, h) || !eq(e, r) || !eq(e, s))
        {
            m = wf;
        }

        // Intersections
        if !eq(e, f) && all4(e, c, i, d, q) && all2(f, b, h) && !eq(f, key_far(3, 0)) {
            k = wf;
            m = wf;
        }
        if !eq(e, d) && all4(e, a, g, f, r) && all2(d, b, h) && !eq(d, key_far(-3, 0)) {
            j = wd;
            l = wd;
        }
        if !eq(e, h) && all4(e, g, i, b, p) && all2(h, d, f) && !eq(h, key_far(0, 3)) {
            l = wh;
            m = wh;
        }
        if !eq(e, b) && all4(e, a, c, h, s) && all2(b, d, f) && !eq(b, key_far(0, -3)) {
            j = wb;
            k = wb;
        }

        // Triangle tips
        if bl < el && all4(e, g, h, i, s) && none4(e, a, d, c, f) {
            j = wb;
            k = wb;
        }
        if hl < el && all4(e, a, b, c, p) && none4(e, d, g, i, f) {
            l = wh;
            m = wh;
        }
        if fl < el && all4(e, a, d, g, q) && none4(e, b, c, i, h) {
            k = wf;
            m = wf;
        }
        if dl < el && all4(e, c, f, i, r) && none4(e, b, a, g, h) {
            j = wd;
            l = wd;
        }

        // 2:1 slopes
        if !eq(h, b) {
            if !eq(h, a) && !eq(h, e) && !eq(h, c) {
                if all3(h, g, f, r) && none2(h, d, key(2, -1)) {
                    l = m;
                }
                if all3(h, i, d, q) && none2(h, f, key(-2, -1)) {
                    m = l;
                }
            }
            if !eq(b, i) && !eq(b, g) && !eq(b, e) {
                if all3(b, a, f, r) && none2(b, d, key(2, 1)) {
                    j = k;
                }
                if all3(b, c, d, q) && none2(b, f, key(-2, 1)) {
                    k = j;
                }
            }
        }
        if !eq(f, d) {
            if !eq(d, i) && !eq(d, e) && !eq(d, c) {
                if all3(d, a, h, s) && none2(d, b, key(1, 2)) {
                    j = l;
                }
                if all3(d, g, b, p) && none2(d, h, key(1, -2)) {
                    l = j;
                }
            }
            if !eq(f, e) && !eq(f, a) && !eq(f, g) {
                if all3(f, c, h, s) && none2(f, b, key(-1, 2)) {
                    k = m;
                }
                if all3(f, i, b, p) && none2(f, h, key(-1, -2)) {
                    m = k;
                }
            }
        }

        [[j, k], [l, m]]
    }
}

impl<Q, K, W> UpscaleKernel<K, W> for Mmpx<Q>
where
    Q: Equality<K>,
    K: Copy,
    W: WorkColor,
{
    const SCALE_X: usize = 2;
    const SCALE_Y: usize = 2;
    const RADIUS: i32 = 3;

    fn scale<S, E: Encode<W, S>>(
        &self,
        window: &NeighborWindow<'_, K, W>,
        dst: &mut [S],
        dst_stride: usize,
        encoder: &E,
    ) {
        let block = self.block(window);
        OutputBlock::new(dst, dst_stride, encoder).put_all(&block);
    }
}
