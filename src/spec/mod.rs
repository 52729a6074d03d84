//! Specification assembly: the GR(1) accumulator and the composite
//! builders that orchestrate formula families into it.

pub mod action;
pub mod agent;
pub mod goals;
pub mod gr1;
pub mod init;
pub mod topology;

pub use action::ActionSpecification;
pub use agent::{AgentSpecification, AgentSpecificationOptions};
pub use goals::GoalSpecification;
pub use gr1::Gr1Specification;
pub use init::InitialConditionsSpecification;
pub use topology::TransitionSystemSpecification;
