//! Rule tables and their interpreter
//!
//! A table is an ordered list of [`Rule`]s. A rule matches a (role-frame)
//! pattern code when any of its `(mask, value)` pairs satisfies
//! `code & mask == value` and, if it carries a tie-break, the two named
//! roles compare as different. The first matching rule wins; every table
//! ends with an unconditional rule, so lookup is total over all 256 codes.

use pixscale_core::Lerp;

/// Role indices (see [`crate::kernels::frame`]).
pub(crate) const W0: u8 = 0;
pub(crate) const W1: u8 = 1;
pub(crate) const W3: u8 = 3;
pub(crate) const W4: u8 = 4;
pub(crate) const W5: u8 = 5;
pub(crate) const W7: u8 = 7;

/// Fixed combination of role colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Recipe {
    Copy(u8),
    Mix2([(u8, u32); 2]),
    Mix3([(u8, u32); 3]),
}

/// The center pixel unchanged.
pub(crate) const C: Recipe = Recipe::Copy(W4);

pub(crate) const fn mix2(a: u8, wa: u32, b: u8, wb: u32) -> Recipe {
    Recipe::Mix2([(a, wa), (b, wb)])
}

pub(crate) const fn mix3(a: u8, wa: u32, b: u8, wb: u32, c: u8, wc: u32) -> Recipe {
    Recipe::Mix3([(a, wa), (b, wb), (c, wc)])
}

impl Recipe {
    /// Evaluate over role-ordered Work colors.
    #[inline]
    pub(crate) fn eval<W: Copy, L: Lerp<W>>(&self, works: &[W; 9], lerp: &L) -> W {
        match *self {
            Recipe::Copy(r) => works[r as usize],
            Recipe::Mix2([(a, wa), (b, wb)]) => {
                lerp.lerp2((works[a as usize], wa), (works[b as usize], wb))
            }
            Recipe::Mix3([(a, wa), (b, wb), (c, wc)]) => lerp.lerp3(
                (works[a as usize], wa),
                (works[b as usize], wb),
                (works[c as usize], wc),
            ),
        }
    }
}

/// One table row: conditions, optional tie-break, and one recipe per
/// output cell the table covers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule<const N: usize> {
    pub when: &'static [(u8, u8)],
    pub tie: Option<(u8, u8)>,
    pub recipes: [Recipe; N],
}

impl<const N: usize> Rule<N> {
    /// Unconditional rule.
    pub(crate) const fn always(recipes: [Recipe; N]) -> Self {
        Self {
            when: &[],
            tie: None,
            recipes,
        }
    }

    /// Rule matching any of `when`.
    pub(crate) const fn on(when: &'static [(u8, u8)], recipes: [Recipe; N]) -> Self {
        Self {
            when,
            tie: None,
            recipes,
        }
    }

    /// Rule matching any of `when` when roles `a` and `b` differ.
    pub(crate) const fn on_diff(
        when: &'static [(u8, u8)],
        a: u8,
        b: u8,
        recipes: [Recipe; N],
    ) -> Self {
        Self {
            when,
            tie: Some((a, b)),
            recipes,
        }
    }

    #[inline]
    fn matches(&self, code: u8) -> bool {
        self.when.is_empty() || self.when.iter().any(|&(m, v)| code & m == v)
    }
}

/// First rule of `table` that matches `code`.
///
/// `differs(a, b)` answers tie-breaks between two roles. It is only called
/// for rules whose code condition already matched.
#[inline]
pub(crate) fn select<const N: usize>(
    table: &'static [Rule<N>],
    code: u8,
    differs: impl Fn(u8, u8) -> bool,
) -> &'static Rule<N> {
    for rule in table {
        if !rule.matches(code) {
            continue;
        }
        match rule.tie {
            Some((a, b)) if !differs(a, b) => continue,
            _ => return rule,
        }
    }
    // Tables end with an unconditional rule; see `table_is_total`.
    &table[table.len() - 1]
}

/// Whether the last rule of `table` matches unconditionally.
#[cfg(test)]
pub(crate) fn table_is_total<const N: usize>(table: &[Rule<N>]) -> bool {
    table
        .last()
        .is_some_and(|r| r.when.is_empty() && r.tie.is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixscale_core::{IntegerLerp, Rgba8};

    static TABLE: [Rule<1>; 3] = [
        Rule::on_diff(&[(0x0f, 0x01)], W1, W3, [mix2(W4, 3, W0, 1)]),
        Rule::on(&[(0x0f, 0x01), (0xff, 0xff)], [mix2(W4, 1, W1, 1)]),
        Rule::always([C]),
    ];

    #[test]
    fn test_select_order_and_tie() {
        assert_eq!(select(&TABLE, 0x01, |_, _| true).recipes[0], mix2(W4, 3, W0, 1));
        assert_eq!(select(&TABLE, 0x01, |_, _| false).recipes[0], mix2(W4, 1, W1, 1));
        assert_eq!(select(&TABLE, 0xff, |_, _| true).recipes[0], mix2(W4, 1, W1, 1));
        assert_eq!(select(&TABLE, 0x02, |_, _| true).recipes[0], C);
        assert!(table_is_total(&TABLE));
    }

    #[test]
    fn test_eval() {
        let works: [Rgba8; 9] = std::array::from_fn(|i| Rgba8::rgb(i as u8 * 10, 0, 0));
        assert_eq!(C.eval(&works, &IntegerLerp), works[4]);
        assert_eq!(
            mix2(W4, 3, W0, 1).eval(&works, &IntegerLerp),
            Rgba8::rgb(30, 0, 0)
        );
        assert_eq!(
            mix3(W4, 2, W3, 1, W5, 1).eval(&works, &IntegerLerp),
            Rgba8::rgb(40, 0, 0)
        );
    }
}
