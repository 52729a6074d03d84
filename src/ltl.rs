//! Boolean operators and the "next" temporal operator.
//!
//! Only the connectives needed by the structured-slugs output format are
//! provided; the remaining LTL operators are implicit in the section a
//! formula is loaded into (safety vs. liveness).
//!
//! The canonicalization rules here are part of the observable contract:
//! a single term is never wrapped, multiple terms get exactly one pair of
//! parentheses, and `next` reuses an existing outer pair instead of
//! stacking a redundant one.

/// Conjunction of the given terms, in order.
pub fn conj(terms: &[String]) -> String {
    match terms {
        [] => String::new(),
        [only] => only.clone(),
        many => paren(&many.join(" & ")),
    }
}

/// Disjunction of the given terms, in order.
pub fn disj(terms: &[String]) -> String {
    match terms {
        [] => String::new(),
        [only] => only.clone(),
        many => paren(&many.join(" | ")),
    }
}

/// Prefix negation.
pub fn neg(term: &str) -> String {
    format!("! {}", term)
}

/// The "next" operator. A term that is already a single parenthesized
/// group is wrapped directly, without an extra pair of parentheses.
pub fn next(term: &str) -> String {
    if term.starts_with('(') && term.ends_with(')') {
        format!("next{}", term)
    } else {
        format!("next{}", paren(term))
    }
}

pub fn implication(left_hand_side: &str, right_hand_side: &str) -> String {
    format!("{} -> {}", left_hand_side, right_hand_side)
}

pub fn iff(left_hand_side: &str, right_hand_side: &str) -> String {
    format!("{} <-> {}", left_hand_side, right_hand_side)
}

pub fn paren(term: &str) -> String {
    format!("({})", term)
}
