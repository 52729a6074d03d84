//! Top-level orchestration: build one complete GR(1) specification for
//! an agent out of its topology, action, goal and initial-condition
//! parts.

use indexmap::IndexSet;
use log::{debug, info};

use crate::config::AgentConfiguration;
use crate::errors::{SpecError, SpecResult};
use crate::spec::action::ActionSpecification;
use crate::spec::goals::GoalSpecification;
use crate::spec::gr1::Gr1Specification;
use crate::spec::init::InitialConditionsSpecification;
use crate::spec::topology::TransitionSystemSpecification;

/// Options for assembling a complete agent specification.
#[derive(Debug, Clone)]
pub struct AgentSpecificationOptions {
    /// Possible outcomes of activating an action or region transition.
    pub action_outcomes: Vec<String>,
    /// Outcomes of the overall state machine: `[success]` or
    /// `[success, failure]`.
    pub sm_outcomes: Vec<String>,
    /// Whether goals must be achieved in the order given.
    pub strict_order: bool,
    /// Regions the specification should be restricted to; empty keeps
    /// the whole transition system.
    pub regions_of_interest: Vec<String>,
}

impl Default for AgentSpecificationOptions {
    fn default() -> Self {
        Self {
            action_outcomes: vec!["completed".to_string(), "failed".to_string()],
            sm_outcomes: vec!["finished".to_string(), "failed".to_string()],
            strict_order: true,
            regions_of_interest: Vec::new(),
        }
    }
}

/// Builds the complete specification for an agent: the transition
/// system's formulas over the regions of interest, the activation and
/// precondition formulas for every non-topology goal, the goal liveness
/// with its memory machinery (plus the failure latch when a failure
/// outcome is present), and finally the initial conditions derived from
/// everything accumulated so far.
pub struct AgentSpecification;

impl AgentSpecification {
    pub fn build(
        name: &str,
        config: &AgentConfiguration,
        initial_conditions: &[String],
        goals: &[String],
        options: &AgentSpecificationOptions,
    ) -> SpecResult<Gr1Specification> {
        if options.action_outcomes.len() > options.sm_outcomes.len() {
            return Err(SpecError::Unsupported(format!(
                "cannot handle more action outcomes {:?} than state machine outcomes {:?}",
                options.action_outcomes, options.sm_outcomes
            )));
        }

        info!("building specification {} for {} goals", name, goals.len());

        let ts_spec = TransitionSystemSpecification::new(
            name,
            &config.ts,
            &options.regions_of_interest,
            &options.action_outcomes,
        )?;

        let mut action_spec = ActionSpecification::new(name, config.preconditions.clone());
        for goal in goals {
            // Topology goals are already covered by the transition
            // system's formulas.
            if !ts_spec.ts().contains(goal) {
                action_spec.handle_new_action(goal, &options.action_outcomes)?;
            }
        }

        let mut goal_spec = GoalSpecification::new(name);
        goal_spec.handle_single_liveness(goals, &options.sm_outcomes, options.strict_order)?;

        if let [_, failure] = options.sm_outcomes.as_slice() {
            let conditions = failure_conditions(&ts_spec, &action_spec)?;
            debug!(
                "wiring failure outcome {} to {} conditions",
                failure,
                conditions.len()
            );
            goal_spec.handle_any_failure(&conditions, failure)?;
        }

        let mut complete = Gr1Specification::new(name);
        complete.merge([
            ts_spec.into_spec(),
            action_spec.into_spec(),
            goal_spec.into_spec(),
        ]);

        let mut ic_spec = InitialConditionsSpecification::new(name);
        ic_spec.set_from_spec(&complete, initial_conditions)?;
        complete.merge([ic_spec.into_spec()]);

        Ok(complete)
    }
}

/// Everything that can fail: every region of interest and every action
/// that was handled. A name appearing as both is a configuration defect.
fn failure_conditions(
    ts_spec: &TransitionSystemSpecification,
    action_spec: &ActionSpecification,
) -> SpecResult<Vec<String>> {
    let mut conditions: IndexSet<String> =
        ts_spec.ts().regions().map(str::to_string).collect();

    for action in action_spec.handled_actions() {
        if !conditions.insert(action.clone()) {
            return Err(SpecError::ConfigError(format!(
                "{} is both a region and an action",
                action
            )));
        }
    }

    Ok(conditions.into_iter().collect())
}
