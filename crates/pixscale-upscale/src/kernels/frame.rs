//! Relabelled 3x3 neighborhoods
//!
//! Corner rules are written once, for the top-left corner of the output
//! block, over *roles* `0..9` laid out as
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! A [`Frame`] says which source pixel plays each role. Evaluating the same
//! rule through the four mirror frames (2x, 4x) or the four turn frames (3x)
//! covers the whole block, and keeps the four corners consistent with each
//! other.

/// Role `r` reads source pixel `self.0[r]` (row-major 3x3 index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame(pub [usize; 9]);

/// Neighbors that contribute to a pattern code, in bit order.
pub(crate) const PATTERN_NEIGHBORS: [usize; 8] = [0, 1, 2, 3, 5, 6, 7, 8];

#[inline]
const fn bit_of(pixel: usize) -> usize {
    if pixel < 4 { pixel } else { pixel - 1 }
}

impl Frame {
    pub const IDENTITY: Frame = Frame([0, 1, 2, 3, 4, 5, 6, 7, 8]);
    /// Left-right mirror: the top-left rule lands on the top-right corner.
    pub const MIRROR_X: Frame = Frame([2, 1, 0, 5, 4, 3, 8, 7, 6]);
    /// Top-bottom mirror: the top-left rule lands on the bottom-left corner.
    pub const MIRROR_Y: Frame = Frame([6, 7, 8, 3, 4, 5, 0, 1, 2]);
    /// Both mirrors: the top-left rule lands on the bottom-right corner.
    pub const MIRROR_XY: Frame = Frame([8, 7, 6, 5, 4, 3, 2, 1, 0]);
    /// Quarter turn clockwise: top-left lands on top-right.
    pub const TURN_CW: Frame = Frame([2, 5, 8, 1, 4, 7, 0, 3, 6]);
    /// Quarter turn counter-clockwise: top-left lands on bottom-left.
    pub const TURN_CCW: Frame = Frame([6, 3, 0, 7, 4, 1, 8, 5, 2]);
    /// Half turn: top-left lands on bottom-right.
    pub const TURN_180: Frame = Frame([8, 7, 6, 5, 4, 3, 2, 1, 0]);

    /// The four mirror frames in TL, TR, BL, BR order.
    pub const MIRRORS: [Frame; 4] = [
        Frame::IDENTITY,
        Frame::MIRROR_X,
        Frame::MIRROR_Y,
        Frame::MIRROR_XY,
    ];

    /// The four turn frames in TL, TR, BR, BL order.
    pub const TURNS: [Frame; 4] = [
        Frame::IDENTITY,
        Frame::TURN_CW,
        Frame::TURN_180,
        Frame::TURN_CCW,
    ];

    /// Whether the top-left role lands on the right half of the block.
    #[inline]
    pub fn flips_x(&self) -> bool {
        self.0[0] % 3 == 2
    }

    /// Whether the top-left role lands on the bottom half of the block.
    #[inline]
    pub fn flips_y(&self) -> bool {
        self.0[0] / 3 == 2
    }

    /// Reorder source-ordered values into role order.
    #[inline]
    pub fn pick<T: Copy>(&self, pixels: &[T; 9]) -> [T; 9] {
        std::array::from_fn(|r| pixels[self.0[r]])
    }

    /// Rewrite a source pattern code so bit `i` refers to role
    /// `PATTERN_NEIGHBORS[i]` instead of source pixel `PATTERN_NEIGHBORS[i]`.
    #[inline]
    pub fn relabel(&self, code: u8) -> u8 {
        let mut out = 0u8;
        for (bit, &role) in PATTERN_NEIGHBORS.iter().enumerate() {
            if code & (1 << bit_of(self.0[role])) != 0 {
                out |= 1 << bit;
            }
        }
        out
    }

    /// Cell of an `n` x `n` block that role-frame cell `(x, y)` lands on.
    ///
    /// Only meaningful for mirror frames.
    #[inline]
    pub fn mirror_cell(&self, x: usize, y: usize, n: usize) -> (usize, usize) {
        let x = if self.flips_x() { n - 1 - x } else { x };
        let y = if self.flips_y() { n - 1 - y } else { y };
        (x, y)
    }
}

/// Pattern code of a 3x3 neighborhood: bit `i` is set when neighbor
/// `PATTERN_NEIGHBORS[i]` differs from the center.
#[inline]
pub(crate) fn pattern_code<K: Copy>(keys: &[K; 9], differs: impl Fn(K, K) -> bool) -> u8 {
    let center = keys[4];
    let mut code = 0u8;
    for (bit, &p) in PATTERN_NEIGHBORS.iter().enumerate() {
        if differs(center, keys[p]) {
            code |= 1 << bit;
        }
    }
    code
}
