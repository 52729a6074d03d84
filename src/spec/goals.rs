//! Specification of the conditions under which the agent wins: the
//! system liveness requirement, the goal-memory formulas that trigger
//! it, and optionally the failure latch.

use log::debug;

use crate::errors::{SpecError, SpecResult};
use crate::formula::goals;
use crate::spec::gr1::Gr1Specification;

/// Builds the goal part of an agent specification.
#[derive(Debug, Default)]
pub struct GoalSpecification {
    spec: Gr1Specification,
}

impl GoalSpecification {
    pub fn new(name: &str) -> Self {
        Self {
            spec: Gr1Specification::new(name),
        }
    }

    pub fn spec(&self) -> &Gr1Specification {
        &self.spec
    }

    pub fn into_spec(self) -> Gr1Specification {
        self.spec
    }

    /// Create a single liveness requirement from one or more goals,
    /// along with the goal-memory formulas that trigger it.
    ///
    /// The outcome list must be `[success]` or `[success, failure]`; the
    /// first outcome is always the success proposition. Zero outcomes or
    /// more than two are an error, raised before anything is loaded.
    pub fn handle_single_liveness(
        &mut self,
        goals: &[String],
        outcomes: &[String],
        strict_order: bool,
    ) -> SpecResult<()> {
        if outcomes.is_empty() {
            return Err(SpecError::Unsupported(
                "a goal specification needs at least a success outcome".to_string(),
            ));
        }
        if outcomes.len() > 2 {
            return Err(SpecError::Unsupported(format!(
                "only success and failure outcomes are supported, got {:?}",
                outcomes
            )));
        }

        debug!("goal liveness over {:?} with outcomes {:?}", goals, outcomes);

        let liveness_family = goals::system_liveness(outcomes, true);
        let success_family = goals::successful_outcome(goals, &outcomes[0], strict_order)?;

        self.spec.load_families([liveness_family, success_family]);

        Ok(())
    }

    /// Tie the failure outcome to the given conditions: the failure
    /// proposition latches as soon as any of them reports its failure
    /// outcome.
    pub fn handle_any_failure(&mut self, conditions: &[String], failure: &str) -> SpecResult<()> {
        let failure_family = goals::failed_outcome(conditions, failure)?;
        self.spec.load(failure_family);

        Ok(())
    }
}
