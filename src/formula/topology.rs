//! Formula families derived from a transition-system encoding of the
//! workspace (regions and their adjacency), treating each region
//! transition as an activation-outcome entity.

use crate::errors::SpecResult;
use crate::formula::context::ActivationContext;
use crate::ltl;
use crate::models::propositions;
use crate::models::{FormulaFamily, SectionTag, TransitionSystem};

fn topology_context(ts: &TransitionSystem, outcomes: &[String]) -> SpecResult<ActivationContext> {
    ActivationContext::new(&[], outcomes, ts.clone())
}

const COMPLETED: &str = "completed";

/// System requirements encoding the adjacency relation, extended with
/// the option to activate nothing in the next step: completing a region
/// implies next activating one adjacent region (in mutex-annotated
/// form), or no region at all.
pub fn transition_relation(ts: &TransitionSystem) -> SpecResult<FormulaFamily> {
    let ctx = topology_context(ts, &[COMPLETED.to_string()])?;

    let activate_nothing = ctx.activate_nothing();

    let mut formulas = Vec::new();
    for (region, adjacent) in ctx.source_ts().iter() {
        let left_hand_side = ltl::next(&propositions::completion(region));

        let mut right_hand_side = Vec::new();
        for adj_region in adjacent {
            let adj_act = propositions::activation(adj_region)?;
            right_hand_side.push(ltl::next(&ctx.phi_prop(&adj_act)?));
        }
        right_hand_side.push(ltl::next(&activate_nothing));

        formulas.push(ltl::implication(
            &left_hand_side,
            &ltl::disj(&right_hand_side),
        ));
    }

    Ok(FormulaFamily::new(
        SectionTag::SysTrans,
        ctx.env_props().to_vec(),
        ctx.sys_props().to_vec(),
        formulas,
    ))
}

/// Environment assumptions enforcing mutual exclusion between the
/// completion propositions of the regions, future-primed.
pub fn mutex(ts: &TransitionSystem) -> SpecResult<FormulaFamily> {
    let ctx = topology_context(ts, &[COMPLETED.to_string()])?;

    let formulas = ctx.mutex_formulas(ctx.env_props(), true);

    Ok(FormulaFamily::new(
        SectionTag::EnvTrans,
        ctx.env_props().to_vec(),
        ctx.sys_props().to_vec(),
        formulas,
    ))
}

/// Safety assumptions on how the completion propositions may change in a
/// single step in response to activations: from region `r` with the
/// transition to `r'` commanded, the next step either still reports `r`
/// or reports one of `r'`'s outcomes.
pub fn single_step_change(
    ts: &TransitionSystem,
    outcomes: &[String],
) -> SpecResult<FormulaFamily> {
    let ctx = topology_context(ts, outcomes)?;

    let mut formulas = Vec::new();
    for (region, adjacent) in ctx.source_ts().iter() {
        let completion = propositions::completion(region);
        let next_completion = ltl::next(&completion);

        for adj_region in adjacent {
            let adj_act = propositions::activation(adj_region)?;
            let phi = ctx.phi_prop(&adj_act)?;

            let left_hand_side = ltl::conj(&[completion.clone(), phi]);

            // The self-loop case reports the region's own completion
            // twice; deduplicate in insertion order.
            let mut rhs_elements = vec![next_completion.clone()];
            for out in &ctx.outcome_props()[adj_region] {
                let next_out = ltl::next(out);
                if !rhs_elements.contains(&next_out) {
                    rhs_elements.push(next_out);
                }
            }

            formulas.push(ltl::implication(
                &left_hand_side,
                &ltl::disj(&rhs_elements),
            ));
        }
    }

    Ok(FormulaFamily::new(
        SectionTag::EnvTrans,
        ctx.env_props().to_vec(),
        ctx.sys_props().to_vec(),
        formulas,
    ))
}

/// Safety assumptions keeping a region outcome false while its
/// transition is not activated.
pub fn outcome_constraints(
    ts: &TransitionSystem,
    outcomes: &[String],
) -> SpecResult<FormulaFamily> {
    let ctx = topology_context(ts, outcomes)?;

    let mut formulas = Vec::new();
    for (region, outs) in ctx.outcome_props() {
        let not_act = ltl::neg(&propositions::activation(region)?);
        for out in outs {
            let not_out = ltl::neg(out);
            let left_hand_side = ltl::conj(&[not_out.clone(), not_act.clone()]);
            formulas.push(ltl::implication(&left_hand_side, &ltl::next(&not_out)));
        }
    }

    Ok(FormulaFamily::new(
        SectionTag::EnvTrans,
        ctx.env_props().to_vec(),
        ctx.sys_props().to_vec(),
        formulas,
    ))
}

/// Region outcomes persist while no transition at all is activated.
pub fn outcome_persistence(
    ts: &TransitionSystem,
    outcomes: &[String],
) -> SpecResult<FormulaFamily> {
    let ctx = topology_context(ts, outcomes)?;

    let activate_nothing = ctx.activate_nothing();

    let mut formulas = Vec::new();
    for outs in ctx.outcome_props().values() {
        for out in outs {
            let left_hand_side = ltl::conj(&[out.clone(), activate_nothing.clone()]);
            formulas.push(ltl::implication(&left_hand_side, &ltl::next(out)));
        }
    }

    Ok(FormulaFamily::new(
        SectionTag::EnvTrans,
        ctx.env_props().to_vec(),
        ctx.sys_props().to_vec(),
        formulas,
    ))
}

/// A single environment liveness assumption: infinitely often, either
/// some commanded transition reports an outcome, or the commanded
/// transition changes, or nothing is commanded at all.
pub fn fairness(ts: &TransitionSystem, outcomes: &[String]) -> SpecResult<FormulaFamily> {
    let ctx = topology_context(ts, outcomes)?;

    let mut completion_terms = Vec::new();
    let mut change_terms = Vec::new();

    for region in ctx.source_ts().regions() {
        let act_prop = propositions::activation(region)?;
        let phi = ctx.phi_prop(&act_prop)?;
        let not_next_phi = ltl::neg(&ltl::next(&phi));

        let next_outs: Vec<String> = ctx.outcome_props()[region]
            .iter()
            .map(|out| ltl::next(out))
            .collect();
        let out_disjunct = ltl::disj(&next_outs);

        completion_terms.push(ltl::conj(&[phi.clone(), out_disjunct]));
        change_terms.push(ltl::conj(&[phi, not_next_phi]));
    }

    let fairness_formula = ltl::disj(&[
        ltl::disj(&completion_terms),
        ltl::disj(&change_terms),
        ctx.activate_nothing(),
    ]);

    Ok(FormulaFamily::new(
        SectionTag::EnvLiveness,
        ctx.env_props().to_vec(),
        ctx.sys_props().to_vec(),
        vec![fairness_formula],
    ))
}
