pub mod family;
pub mod propositions;
pub mod transition_system;

pub use family::{FormulaFamily, SectionTag};
pub use transition_system::TransitionSystem;
