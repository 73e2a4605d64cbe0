//! EPX and EPX-C corner kernels (2x)
//!
//! ```text
//!   A        1 | 2
//! C P B     ---+---
//!   D        3 | 4
//! ```
//!
//! EPX: corner 1 becomes the 1:1 mix of A and C when `A == C`, `A != D`
//! and `C != B`; otherwise it stays P. The other corners follow by mirror
//! symmetry. Under exact equality the mix of two equal colors is that
//! color, so EPX reproduces Scale2x.
//!
//! EPX-C keeps the EPX rule and adds two weaker cases for corners EPX
//! leaves alone: a 5:1:1:1 soft corner where both cardinals agree but the
//! gate failed, and a 3:1 hint towards a cardinal that continues into the
//! diagonal.

use pixscale_core::{Encode, Equality, Lerp, NeighborWindow, OutputBlock, UpscaleKernel};

use super::frame::Frame;

/// Role indices used below.
const DIAG: usize = 0;
const TOP: usize = 1;
const LEFT: usize = 3;
const CENTER: usize = 4;
const RIGHT: usize = 5;
const BOTTOM: usize = 7;

/// Whether the EPX corner rule fires for the top-left corner.
#[inline]
fn epx_fires<K: Copy, Q: Equality<K>>(eq: &Q, keys: &[K; 9]) -> bool {
    eq.equals(keys[TOP], keys[LEFT])
        && eq.differs(keys[TOP], keys[BOTTOM])
        && eq.differs(keys[LEFT], keys[RIGHT])
}

#[inline]
fn mirrored_2x2<K, W, S, E>(
    window: &NeighborWindow<'_, K, W>,
    dst: &mut [S],
    dst_stride: usize,
    encoder: &E,
    corner: impl Fn(&[K; 9], &[W; 9]) -> W,
) where
    K: Copy,
    W: Copy,
    E: Encode<W, S>,
{
    let keys = window.keys3x3();
    let works = window.works3x3();
    let mut out = OutputBlock::new(dst, dst_stride, encoder);
    for frame in Frame::MIRRORS {
        let (x, y) = frame.mirror_cell(0, 0, 2);
        out.put(x, y, corner(&frame.pick(&keys), &frame.pick(&works)));
    }
}

/// EPX kernel.
#[derive(Debug, Clone)]
pub struct Epx<Q, L> {
    equality: Q,
    lerp: L,
}

impl<Q, L> Epx<Q, L> {
    pub fn new(equality: Q, lerp: L) -> Self {
        Self { equality, lerp }
    }
}

impl<Q, L, K, W> UpscaleKernel<K, W> for Epx<Q, L>
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
        mirrored_2x2(window, dst, dst_stride, encoder, |keys, works| {
            if epx_fires(&self.equality, keys) {
                self.lerp.lerp2((works[TOP], 1), (works[LEFT], 1))
            } else {
                works[CENTER]
            }
        });
    }
}

/// EPX with soft corners.
#[derive(Debug, Clone)]
pub struct EpxC<Q, L> {
    equality: Q,
    lerp: L,
}

impl<Q, L> EpxC<Q, L> {
    pub fn new(equality: Q, lerp: L) -> Self {
        Self { equality, lerp }
    }

    fn corner<K: Copy, W: Copy>(&self, keys: &[K; 9], works: &[W; 9]) -> W
    where
        Q: Equality<K>,
        L: Lerp<W>,
    {
        let eq = |a: usize, b: usize| self.equality.equals(keys[a], keys[b]);
        if epx_fires(&self.equality, keys) {
            return self.lerp.lerp2((works[TOP], 1), (works[LEFT], 1));
        }
        if eq(TOP, LEFT) && !eq(CENTER, TOP) {
            return self.lerp.lerp4(
                (works[CENTER], 5),
                (works[TOP], 1),
                (works[LEFT], 1),
                (works[DIAG], 1),
            );
        }
        let top = eq(TOP, DIAG) && !eq(TOP, CENTER);
        let left = eq(LEFT, DIAG) && !eq(LEFT, CENTER);
        match (top, left) {
            (true, false) => self.lerp.lerp2((works[CENTER], 3), (works[TOP], 1)),
            (false, true) => self.lerp.lerp2((works[CENTER], 3), (works[LEFT], 1)),
            _ => works[CENTER],
        }
    }
}

impl<Q, L, K, W> UpscaleKernel<K, W> for EpxC<Q, L>
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
        mirrored_2x2(window, dst, dst_stride, encoder, |keys, works| {
            self.corner(keys, works)
        });
    }
}
