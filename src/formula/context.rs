//! The shared proposition/naming context of the activation-outcomes
//! paradigm.
//!
//! The paradigm generalizes activation-completion: activating a
//! proposition eventually makes the environment report exactly one of a
//! set of outcomes (e.g. completed, failed, preempted). Each formula
//! family is generated against one of these contexts.

use indexmap::IndexMap;

use crate::errors::{SpecError, SpecResult};
use crate::formula::base::Gr1Generator;
use crate::ltl;
use crate::models::propositions;
use crate::models::TransitionSystem;

/// Proposition bookkeeping for a set of base propositions under a set of
/// outcome labels, optionally over a transition system.
///
/// System propositions are rebound to activation form and environment
/// propositions to the (proposition x outcome) cross product, ordered
/// propositions-outer / outcomes-inner. The transition system is also
/// rewritten into its activation-outcome view: completion-form keys,
/// activation-form adjacency values.
#[derive(Debug, Clone)]
pub struct ActivationContext {
    outcomes: Vec<String>,
    outcome_props: IndexMap<String, Vec<String>>,
    base: Gr1Generator,
    source_ts: TransitionSystem,
    act_out_ts: IndexMap<String, Vec<String>>,
}

impl ActivationContext {
    /// Build a context for the given base propositions and outcome
    /// labels. Fails if any proposition is already in activation form,
    /// if the outcome list is empty, or if two outcome labels share a
    /// first character (first characters become name subscripts).
    pub fn new(
        props: &[String],
        outcomes: &[String],
        ts: TransitionSystem,
    ) -> SpecResult<Self> {
        check_outcome_labels(outcomes)?;

        let mut all_props: Vec<String> = Vec::new();
        for prop in props.iter().map(String::as_str).chain(ts.regions()) {
            if propositions::is_activation(prop) {
                return Err(SpecError::InvalidProposition(format!(
                    "proposition {} is already in activation form",
                    prop
                )));
            }
            if !all_props.iter().any(|p| p.as_str() == prop) {
                all_props.push(prop.to_string());
            }
        }

        let mut act_props = Vec::with_capacity(all_props.len());
        let mut outcome_props = IndexMap::new();
        let mut env_props = Vec::new();
        for prop in &all_props {
            act_props.push(propositions::activation(prop)?);

            let mut outs = Vec::with_capacity(outcomes.len());
            for label in outcomes {
                outs.push(propositions::outcome(prop, label)?);
            }
            env_props.extend(outs.iter().cloned());
            outcome_props.insert(prop.clone(), outs);
        }

        let mut act_out_ts = IndexMap::new();
        for (region, adjacent) in ts.iter() {
            let adjacent_act = adjacent
                .iter()
                .map(|target| propositions::activation(target))
                .collect::<SpecResult<Vec<String>>>()?;
            act_out_ts.insert(propositions::completion(region), adjacent_act);
        }

        Ok(Self {
            outcomes: outcomes.to_vec(),
            outcome_props,
            base: Gr1Generator::new(env_props, act_props, TransitionSystem::empty()),
            source_ts: ts,
            act_out_ts,
        })
    }

    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }

    /// Outcome propositions per base proposition, in insertion order.
    pub fn outcome_props(&self) -> &IndexMap<String, Vec<String>> {
        &self.outcome_props
    }

    /// All outcome propositions (the environment side of the paradigm).
    pub fn env_props(&self) -> &[String] {
        self.base.env_props()
    }

    /// All activation propositions (the system side of the paradigm).
    pub fn sys_props(&self) -> &[String] {
        self.base.sys_props()
    }

    /// The transition system as supplied by the caller.
    pub fn source_ts(&self) -> &TransitionSystem {
        &self.source_ts
    }

    /// The activation-outcome view of the transition system:
    /// completion-form keys with activation-form adjacency values.
    pub fn act_out_ts(&self) -> &IndexMap<String, Vec<String>> {
        &self.act_out_ts
    }

    /// The mutex-annotated version of an activation or outcome
    /// proposition, within its group.
    pub fn phi_prop(&self, prop: &str) -> SpecResult<String> {
        self.base.phi_prop(prop)
    }

    /// Mutual exclusion formulas over the given propositions; see
    /// [`Gr1Generator::mutex_formulas`].
    pub fn mutex_formulas(&self, props: &[String], future: bool) -> Vec<String> {
        self.base.mutex_formulas(props, future)
    }

    /// The condition tying a success proposition to a set of memory
    /// propositions; see [`Gr1Generator::success_condition`].
    pub fn success_condition(&self, mem_props: &[String], success: &str) -> String {
        self.base.success_condition(mem_props, success)
    }

    /// The conjunction stating that none of the activation propositions
    /// is commanded.
    pub fn activate_nothing(&self) -> String {
        let negated: Vec<String> = self.sys_props().iter().map(|p| ltl::neg(p)).collect();
        ltl::conj(&negated)
    }
}

fn check_outcome_labels(outcomes: &[String]) -> SpecResult<()> {
    if outcomes.is_empty() {
        return Err(SpecError::InvalidOutcomes(
            "no outcomes were provided; at least one (e.g. completed) is required".to_string(),
        ));
    }

    let mut initials = Vec::with_capacity(outcomes.len());
    for label in outcomes {
        let initial = label.chars().next().ok_or_else(|| {
            SpecError::InvalidOutcomes("outcome labels must be non-empty".to_string())
        })?;
        if initials.contains(&initial) {
            return Err(SpecError::InvalidOutcomes(format!(
                "outcome labels must have pairwise-distinct first characters: {:?}",
                outcomes
            )));
        }
        initials.push(initial);
    }

    Ok(())
}
