//! Canonical proposition-name derivations for the activation-outcomes
//! paradigm.
//!
//! For a base proposition `p`, the activation proposition is `p_a`, the
//! outcome proposition for an outcome label is `p_` followed by the
//! label's first character (so labels must have pairwise-distinct first
//! characters), and the memory proposition is `p_m`.

use crate::errors::{SpecError, SpecResult};

const ACTIVATION_SUFFIX: &str = "_a";

/// Whether a name is already in activation form (`..._a`).
pub fn is_activation(prop: &str) -> bool {
    prop.ends_with(ACTIVATION_SUFFIX)
}

/// Derive the activation proposition for a base name.
///
/// Passing a name that is already in activation form is a construction
/// error; deriving twice would silently corrupt the naming scheme.
pub fn activation(prop: &str) -> SpecResult<String> {
    if is_activation(prop) {
        return Err(SpecError::InvalidProposition(format!(
            "activation prop was requested for {}",
            prop
        )));
    }
    Ok(format!("{}{}", prop, ACTIVATION_SUFFIX))
}

/// Derive the outcome proposition for the given outcome label.
///
/// Either a base or an activation name may be passed; an activation
/// suffix is stripped before the outcome subscript is appended.
pub fn outcome(prop: &str, outcome_label: &str) -> SpecResult<String> {
    let initial = outcome_label.chars().next().ok_or_else(|| {
        SpecError::InvalidOutcomes(format!("empty outcome label for proposition {}", prop))
    })?;
    Ok(format!("{}_{}", base_name(prop), initial))
}

/// Derive the completion proposition (the `completed` outcome).
pub fn completion(prop: &str) -> String {
    format!("{}_c", base_name(prop))
}

/// Derive the memory proposition recording that a goal has been achieved.
///
/// A name that already carries a one-letter subscript (such as a
/// completion prop) has the subscript replaced rather than appended.
pub fn memory(prop: &str) -> String {
    format!("{}_m", stem_name(prop))
}

fn base_name(prop: &str) -> &str {
    prop.strip_suffix(ACTIVATION_SUFFIX).unwrap_or(prop)
}

fn stem_name(prop: &str) -> &str {
    let bytes = prop.as_bytes();
    if bytes.len() >= 2 && bytes[bytes.len() - 2] == b'_' {
        &prop[..prop.len() - 2]
    } else {
        prop
    }
}
