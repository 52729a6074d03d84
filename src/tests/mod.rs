pub mod action_tests;
pub mod spec_tests;

/// Shorthand for building owned proposition lists in tests.
pub fn props(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
