//! Specification of the safety requirements and environment assumptions
//! governing the activation and outcomes of the agent's actions.
//! Topology-type formulas are handled separately in
//! [`super::topology`].

use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::errors::SpecResult;
use crate::formula::action;
use crate::models::FormulaFamily;
use crate::spec::gr1::Gr1Specification;

/// Builds the action part of an agent specification from a precondition
/// graph: for every action handled, the precondition implication (when
/// the action has preconditions) and the five activation-outcome
/// families scoped to that action.
#[derive(Debug, Default)]
pub struct ActionSpecification {
    spec: Gr1Specification,
    preconditions: IndexMap<String, Vec<String>>,
    handled_actions: IndexSet<String>,
}

impl ActionSpecification {
    pub fn new(name: &str, preconditions: IndexMap<String, Vec<String>>) -> Self {
        Self {
            spec: Gr1Specification::new(name),
            preconditions,
            handled_actions: IndexSet::new(),
        }
    }

    pub fn spec(&self) -> &Gr1Specification {
        &self.spec
    }

    pub fn into_spec(self) -> Gr1Specification {
        self.spec
    }

    /// The actions that have been handled so far, in handling order.
    pub fn handled_actions(&self) -> &IndexSet<String> {
        &self.handled_actions
    }

    /// Generate and load the formulas governing the activation and
    /// outcomes of an action.
    ///
    /// The action's preconditions are expanded first, depth-first and
    /// recursively; an action reachable through several precondition
    /// paths is handled once (memoized by name), so no formula family is
    /// emitted twice.
    pub fn handle_new_action(&mut self, action: &str, outcomes: &[String]) -> SpecResult<()> {
        if self.handled_actions.contains(action) {
            debug!("action {} already handled, skipping", action);
            return Ok(());
        }
        self.handled_actions.insert(action.to_string());

        let mut action_families = Vec::new();

        if let Some(family) = self.preconditions_family(action, outcomes)? {
            action_families.push(family);
        }

        action_families.extend(activation_outcomes_families(action, outcomes)?);

        self.spec.load_families(action_families);

        Ok(())
    }

    /// The precondition family for an action, after recursively handling
    /// every precondition that has an entry of its own in the graph.
    fn preconditions_family(
        &mut self,
        action: &str,
        outcomes: &[String],
    ) -> SpecResult<Option<FormulaFamily>> {
        let action_preconditions = match self.preconditions.get(action) {
            Some(pcs) if !pcs.is_empty() => pcs.clone(),
            _ => return Ok(None),
        };

        for pc in &action_preconditions {
            if self.preconditions.contains_key(pc) {
                self.handle_new_action(pc, outcomes)?;
            }
        }

        Ok(Some(action::preconditions(action, &action_preconditions)?))
    }
}

/// The five activation-outcome families for a single action, in load
/// order: outcome mutex, outcome constraints, persistence, deactivation,
/// fairness.
fn activation_outcomes_families(
    action: &str,
    outcomes: &[String],
) -> SpecResult<Vec<FormulaFamily>> {
    let actions = [action.to_string()];

    Ok(vec![
        action::outcome_mutex(&actions, outcomes)?,
        action::outcome_constraints(&actions, outcomes)?,
        action::outcome_persistence(&actions, outcomes)?,
        action::deactivation(&actions, outcomes)?,
        action::fairness(&actions, outcomes)?,
    ])
}
