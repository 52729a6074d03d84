pub mod config;
pub mod errors;
pub mod formula;
pub mod ltl;
pub mod models;
pub mod spec;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::AgentConfiguration;
pub use errors::{SpecError, SpecResult};
pub use formula::{ActivationContext, Gr1Generator};
pub use models::{
    family::{FormulaFamily, SectionTag},
    transition_system::TransitionSystem,
};
pub use spec::{
    ActionSpecification, AgentSpecification, AgentSpecificationOptions, GoalSpecification,
    Gr1Specification, InitialConditionsSpecification, TransitionSystemSpecification,
};
