//! Scale2x / Scale3x (AdvMAME2x / AdvMAME3x)
//!
//! ```text
//! A B C
//! D E F
//! G H I
//! ```
//!
//! Nothing changes unless `B != H` and `D != F`. When that gate is open,
//! a corner takes the 1:1 mix of its two cardinals if they match. At 3x
//! the edge midpoint next to B takes B when B continues a matching
//! cardinal pair and E differs from the far diagonal of that pair.

use pixscale_core::{Encode, Equality, Lerp, NeighborWindow, OutputBlock, UpscaleKernel};

use super::frame::Frame;

/// Scale2x / Scale3x kernel producing `N` x `N` blocks.
#[derive(Debug, Clone)]
pub struct ScaleNx<Q, L, const N: usize> {
    equality: Q,
    lerp: L,
}

impl<Q, L, const N: usize> ScaleNx<Q, L, N> {
    pub fn new(equality: Q, lerp: L) -> Self {
        Self { equality, lerp }
    }

    #[inline]
    fn gate_open<K: Copy>(&self, keys: &[K; 9]) -> bool
    where
        Q: Equality<K>,
    {
        self.equality.differs(keys[1], keys[7]) && self.equality.differs(keys[3], keys[5])
    }

    /// Top-left corner in role order.
    #[inline]
    fn corner<K: Copy, W: Copy>(&self, keys: &[K; 9], works: &[W; 9]) -> W
    where
        Q: Equality<K>,
        L: Lerp<W>,
    {
        if self.equality.equals(keys[3], keys[1]) {
            self.lerp.lerp2((works[1], 1), (works[3], 1))
        } else {
            works[4]
        }
    }

    /// Top edge midpoint in role order.
    #[inline]
    fn edge<K: Copy, W: Copy>(&self, keys: &[K; 9], works: &[W; 9]) -> W
    where
        Q: Equality<K>,
    {
        let eq = |a: usize, b: usize| self.equality.equals(keys[a], keys[b]);
        if (eq(3, 1) && !eq(4, 2)) || (eq(1, 5) && !eq(4, 0)) {
            works[1]
        } else {
            works[4]
        }
    }
}

impl<Q, L, K, W> UpscaleKernel<K, W> for ScaleNx<Q, L, 2>
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
        let keys = window.keys3x3();
        let works = window.works3x3();
        let mut out = OutputBlock::new(dst, dst_stride, encoder);
        if !self.gate_open(&keys) {
            out.fill(2, 2, works[4]);
            return;
        }
        for frame in Frame::MIRRORS {
            let (x, y) = frame.mirror_cell(0, 0, 2);
            out.put(x, y, self.corner(&frame.pick(&keys), &frame.pick(&works)));
        }
    }
}

impl<Q, L, K, W> UpscaleKernel<K, W> for ScaleNx<Q, L, 3>
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
        let keys = window.keys3x3();
        let works = window.works3x3();
        let mut out = OutputBlock::new(dst, dst_stride, encoder);
        out.fill(3, 3, works[4]);
        if !self.gate_open(&keys) {
            return;
        }
        for frame in Frame::TURNS {
            let k = frame.pick(&keys);
            let w = frame.pick(&works);
            let (corner, edge) = (frame.0[0], frame.0[1]);
            out.put(corner % 3, corner / 3, self.corner(&k, &w));
            out.put(edge % 3, edge / 3, self.edge(&k, &w));
        }
    }
}
