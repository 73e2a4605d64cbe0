//! HQx rule tables
//!
//! All tables describe the top-left corner region of the output block in
//! role coordinates; the kernels apply them through mirror or turn frames.
//! Pattern codes use the role-relabelled bit order
//! `W0 W1 W2 W3 W5 W6 W7 W8` = bits `0..7`, a set bit meaning "differs from
//! the center".
//!
//! The 2x and 3x tables are the classic HQ2x/HQ3x case lists collapsed by
//! symmetry. The 4x table reuses the 2x conditions with one recipe per
//! cell of the 2x2 quadrant, in `[00, 01, 10, 11]` (row, column) order,
//! where `00` is the outer corner.

use super::rules::{C, Rule, W0, W1, W3, W4, W5, W7, mix2, mix3};

/// Left neighbor continues the center while the top edge breaks.
const LEFT_EDGE: &[(u8, u8)] = &[(0xbf, 0x37), (0xdb, 0x13)];
/// Top neighbor continues the center while the left edge breaks.
const TOP_EDGE: &[(u8, u8)] = &[(0xdb, 0x49), (0xef, 0x6d)];
/// Both cardinals continue the center.
const SOLID: &[(u8, u8)] = &[(0x0b, 0x0b), (0xfe, 0x4a), (0xfe, 0x1a)];
/// Diagonal-only corner cases.
const DIAGONAL: &[(u8, u8)] = &[
    (0x6f, 0x2a),
    (0x5b, 0x0a),
    (0xbf, 0x3a),
    (0xdf, 0x5a),
    (0x9f, 0x8a),
    (0xcf, 0x8a),
    (0xef, 0x4e),
    (0x3f, 0x0e),
    (0xfb, 0x5a),
    (0xbb, 0x8a),
    (0x7f, 0x5a),
    (0xaf, 0x8a),
    (0xeb, 0x8a),
];
const TOP_ONLY: &[(u8, u8)] = &[(0x0b, 0x08)];
const LEFT_ONLY: &[(u8, u8)] = &[(0x0b, 0x02)];
const ISOLATED: &[(u8, u8)] = &[(0x2f, 0x2f)];
const LEAN_LEFT: &[(u8, u8)] = &[(0x1b, 0x03), (0x4f, 0x43), (0x8b, 0x83), (0x6b, 0x43)];
const LEAN_TOP: &[(u8, u8)] = &[(0x4b, 0x09), (0x8b, 0x89), (0x1f, 0x19), (0x3b, 0x19)];
const CROSSING: &[(u8, u8)] = &[(0x7e, 0x2a), (0xef, 0xab), (0xbf, 0x8f), (0x7e, 0x0e)];
const DIAGONAL_SOFT: &[(u8, u8)] = &[
    (0xfb, 0x6a),
    (0x6f, 0x6e),
    (0x3f, 0x3e),
    (0xfb, 0xfa),
    (0xdf, 0xde),
    (0xdf, 0x1e),
];
const OPEN: &[(u8, u8)] = &[
    (0x0a, 0x00),
    (0x4f, 0x4b),
    (0x9f, 0x1b),
    (0x2f, 0x0b),
    (0xbe, 0x0a),
    (0xee, 0x0a),
    (0x7e, 0x0a),
    (0xeb, 0x4b),
    (0x3b, 0x1b),
];

/// HQ2x: one recipe for the top-left output pixel.
pub(crate) static HQ2X: [Rule<1>; 15] = [
    Rule::on_diff(LEFT_EDGE, W1, W5, [mix2(W4, 3, W3, 1)]),
    Rule::on_diff(TOP_EDGE, W7, W3, [mix2(W4, 3, W1, 1)]),
    Rule::on_diff(SOLID, W3, W1, [C]),
    Rule::on_diff(DIAGONAL, W3, W1, [mix2(W4, 3, W0, 1)]),
    Rule::on(TOP_ONLY, [mix3(W4, 2, W0, 1, W1, 1)]),
    Rule::on(LEFT_ONLY, [mix3(W4, 2, W0, 1, W3, 1)]),
    Rule::on(ISOLATED, [mix3(W4, 14, W3, 1, W1, 1)]),
    Rule::on(LEFT_EDGE, [mix3(W4, 5, W1, 2, W3, 1)]),
    Rule::on(TOP_EDGE, [mix3(W4, 5, W3, 2, W1, 1)]),
    Rule::on(LEAN_LEFT, [mix2(W4, 3, W3, 1)]),
    Rule::on(LEAN_TOP, [mix2(W4, 3, W1, 1)]),
    Rule::on(CROSSING, [mix3(W4, 2, W3, 3, W1, 3)]),
    Rule::on(DIAGONAL_SOFT, [mix2(W4, 3, W0, 1)]),
    Rule::on(OPEN, [mix3(W4, 2, W3, 1, W1, 1)]),
    Rule::always([mix3(W4, 6, W3, 1, W1, 1)]),
];

/// HQ4x: the HQ2x conditions, one recipe per quadrant cell.
pub(crate) static HQ4X: [Rule<4>; 15] = [
    Rule::on_diff(
        LEFT_EDGE,
        W1,
        W5,
        [mix2(W4, 5, W3, 3), mix2(W4, 7, W3, 1), mix2(W4, 5, W3, 3), C],
    ),
    Rule::on_diff(
        TOP_EDGE,
        W7,
        W3,
        [mix2(W4, 5, W1, 3), mix2(W4, 5, W1, 3), mix2(W4, 7, W1, 1), C],
    ),
    Rule::on_diff(SOLID, W3, W1, [C, C, C, C]),
    Rule::on_diff(
        DIAGONAL,
        W3,
        W1,
        [mix2(W4, 5, W0, 3), mix2(W4, 3, W0, 1), mix2(W4, 3, W0, 1), C],
    ),
    Rule::on(
        TOP_ONLY,
        [
            mix3(W4, 2, W0, 1, W1, 1),
            mix3(W4, 6, W0, 1, W1, 1),
            mix3(W4, 6, W0, 1, W1, 1),
            C,
        ],
    ),
    Rule::on(
        LEFT_ONLY,
        [
            mix3(W4, 2, W0, 1, W3, 1),
            mix3(W4, 6, W0, 1, W3, 1),
            mix3(W4, 6, W0, 1, W3, 1),
            C,
        ],
    ),
    Rule::on(ISOLATED, [mix3(W4, 14, W3, 1, W1, 1), C, C, C]),
    Rule::on(
        LEFT_EDGE,
        [
            mix3(W4, 5, W1, 2, W3, 1),
            mix3(W4, 6, W1, 1, W3, 1),
            mix3(W4, 6, W1, 1, W3, 1),
            C,
        ],
    ),
    Rule::on(
        TOP_EDGE,
        [
            mix3(W4, 5, W3, 2, W1, 1),
            mix3(W4, 6, W3, 1, W1, 1),
            mix3(W4, 6, W3, 1, W1, 1),
            C,
        ],
    ),
    Rule::on(
        LEAN_LEFT,
        [mix2(W4, 3, W3, 1), mix2(W4, 7, W3, 1), mix2(W4, 3, W3, 1), C],
    ),
    Rule::on(
        LEAN_TOP,
        [mix2(W4, 3, W1, 1), mix2(W4, 3, W1, 1), mix2(W4, 7, W1, 1), C],
    ),
    Rule::on(
        CROSSING,
        [mix2(W1, 1, W3, 1), mix2(W1, 1, W4, 1), mix2(W3, 1, W4, 1), C],
    ),
    Rule::on(
        DIAGONAL_SOFT,
        [mix2(W4, 3, W0, 1), mix2(W4, 7, W0, 1), mix2(W4, 7, W0, 1), C],
    ),
    Rule::on(
        OPEN,
        [
            mix3(W4, 2, W3, 1, W1, 1),
            mix3(W4, 5, W1, 2, W3, 1),
            mix3(W4, 5, W3, 2, W1, 1),
            mix3(W4, 6, W3, 1, W1, 1),
        ],
    ),
    Rule::always([
        mix3(W4, 6, W3, 1, W1, 1),
        mix3(W4, 14, W1, 1, W3, 1),
        mix3(W4, 14, W3, 1, W1, 1),
        C,
    ]),
];

/// HQ3x: the top-left corner pixel of the 3x3 block.
pub(crate) static HQ3X_CORNER: [Rule<1>; 10] = [
    Rule::on_diff(TOP_EDGE, W7, W3, [mix2(W4, 3, W1, 1)]),
    Rule::on_diff(LEFT_EDGE, W1, W5, [mix2(W4, 3, W3, 1)]),
    Rule::on_diff(SOLID, W3, W1, [C]),
    Rule::on_diff(DIAGONAL, W3, W1, [mix2(W4, 3, W0, 1)]),
    Rule::on(LEAN_TOP, [mix2(W4, 3, W1, 1)]),
    Rule::on(LEAN_LEFT, [mix2(W4, 3, W3, 1)]),
    Rule::on(CROSSING, [mix2(W3, 1, W1, 1)]),
    Rule::on(
        &[
            (0x4f, 0x4b),
            (0x9f, 0x1b),
            (0x2f, 0x0b),
            (0xbe, 0x0a),
            (0xee, 0x0a),
            (0x7e, 0x0a),
            (0xeb, 0x4b),
            (0x3b, 0x1b),
        ],
        [mix3(W4, 2, W3, 7, W1, 7)],
    ),
    Rule::on(
        &[
            (0x0b, 0x08),
            (0xf9, 0x68),
            (0xf3, 0x62),
            (0x6d, 0x6c),
            (0x67, 0x66),
            (0x3d, 0x3c),
            (0x37, 0x36),
            (0xf9, 0xf8),
            (0xdd, 0xdc),
            (0xf3, 0xf2),
            (0xd7, 0xd6),
            (0xdd, 0x1c),
            (0xd7, 0x16),
            (0x0b, 0x02),
        ],
        [mix2(W4, 3, W0, 1)],
    ),
    Rule::always([mix3(W4, 2, W3, 1, W1, 1)]),
];

/// HQ3x: the top-middle pixel of the 3x3 block.
pub(crate) static HQ3X_EDGE: [Rule<1>; 6] = [
    Rule::on_diff(
        &[
            (0xfe, 0xde),
            (0x9e, 0x16),
            (0xda, 0x12),
            (0x17, 0x16),
            (0x5b, 0x12),
            (0xbb, 0x12),
        ],
        W1,
        W5,
        [C],
    ),
    Rule::on_diff(
        &[
            (0x0f, 0x0b),
            (0x5e, 0x0a),
            (0xfb, 0x7b),
            (0x3b, 0x0b),
            (0xbe, 0x0a),
            (0x7a, 0x0a),
        ],
        W3,
        W1,
        [C],
    ),
    Rule::on(
        &[(0xbf, 0x8f), (0x7e, 0x0e), (0xbf, 0x37), (0xdb, 0x13)],
        [mix2(W1, 3, W4, 1)],
    ),
    Rule::on(
        &[
            (0x02, 0x00),
            (0x7c, 0x28),
            (0xed, 0xa9),
            (0xf5, 0xb4),
            (0xd9, 0x90),
        ],
        [mix2(W4, 3, W1, 1)],
    ),
    Rule::on(
        &[
            (0x4f, 0x4b),
            (0xfb, 0x7b),
            (0xfe, 0x7e),
            (0x9f, 0x1b),
            (0x2f, 0x0b),
            (0xbe, 0x0a),
            (0x7e, 0x0a),
            (0xfb, 0x4b),
            (0xfb, 0xdb),
            (0xfe, 0xde),
            (0xfe, 0x56),
            (0x57, 0x56),
            (0x97, 0x16),
            (0x3f, 0x1e),
            (0xdb, 0x12),
            (0xbb, 0x12),
        ],
        [mix2(W4, 7, W1, 1)],
    ),
    Rule::always([C]),
];

#[cfg(test)]
mod tests {
    use super::super::rules::{Recipe, table_is_total};
    use super::*;

    #[test]
    fn test_tables_are_total() {
        assert!(table_is_total(&HQ2X));
        assert!(table_is_total(&HQ4X));
        assert!(table_is_total(&HQ3X_CORNER));
        assert!(table_is_total(&HQ3X_EDGE));
    }

    fn weights_positive(r: &Recipe) -> bool {
        match r {
            Recipe::Copy(role) => *role < 9,
            Recipe::Mix2(p) => p.iter().all(|&(role, w)| role < 9 && w > 0),
            Recipe::Mix3(p) => p.iter().all(|&(role, w)| role < 9 && w > 0),
        }
    }

    #[test]
    fn test_recipes_well_formed() {
        for rule in HQ2X.iter().chain(HQ3X_CORNER.iter()).chain(HQ3X_EDGE.iter()) {
            assert!(weights_positive(&rule.recipes[0]));
        }
        for rule in HQ4X.iter() {
            assert!(rule.recipes.iter().all(weights_positive));
        }
    }

    #[test]
    fn test_hq4x_follows_hq2x_conditions() {
        for (a, b) in HQ2X.iter().zip(HQ4X.iter()) {
            assert_eq!(a.when, b.when);
            assert_eq!(a.tie, b.tie);
        }
    }
}
