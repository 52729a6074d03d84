//! Specification of the formulas encoding a workspace transition system
//! (topology), restricted to the regions the rest of the specification
//! actually uses.

use log::debug;

use crate::errors::SpecResult;
use crate::formula::{action, topology};
use crate::models::TransitionSystem;
use crate::spec::gr1::Gr1Specification;

/// Builds the topology part of an agent specification: the eight
/// formula families derived from a transition system.
#[derive(Debug, Default)]
pub struct TransitionSystemSpecification {
    spec: Gr1Specification,
    ts: TransitionSystem,
}

impl TransitionSystemSpecification {
    /// Restrict the transition system to the regions of interest (an
    /// empty list means no restriction) and load all topology formula
    /// families over the restricted system.
    pub fn new(
        name: &str,
        ts: &TransitionSystem,
        regions_of_interest: &[String],
        outcomes: &[String],
    ) -> SpecResult<Self> {
        let ts = ts.restrict(regions_of_interest)?;
        debug!(
            "building topology specification {} over {} regions",
            name,
            ts.len()
        );

        let mut spec = Gr1Specification::new(name);

        let region_props: Vec<String> = ts.regions().map(str::to_string).collect();

        spec.load_families([
            topology::transition_relation(&ts)?,
            topology::mutex(&ts)?,
            topology::single_step_change(&ts, outcomes)?,
            topology::outcome_persistence(&ts, outcomes)?,
            topology::fairness(&ts, outcomes)?,
            topology::outcome_constraints(&ts, outcomes)?,
            action::outcome_mutex(&region_props, outcomes)?,
            action::deactivation(&region_props, outcomes)?,
        ]);

        Ok(Self { spec, ts })
    }

    pub fn spec(&self) -> &Gr1Specification {
        &self.spec
    }

    pub fn into_spec(self) -> Gr1Specification {
        self.spec
    }

    /// The restricted transition system the formulas were generated
    /// from.
    pub fn ts(&self) -> &TransitionSystem {
        &self.ts
    }
}
