//! Formula families governing the activation and outcomes of actions
//! (as opposed to topology transitions, which live in
//! [`super::topology`]).
//!
//! Each constructor returns a fully-built [`FormulaFamily`]: the section
//! it belongs to, the propositions it contributes, and its formulas in
//! generation order.

use log::debug;

use crate::errors::SpecResult;
use crate::formula::base::Gr1Generator;
use crate::formula::context::ActivationContext;
use crate::ltl;
use crate::models::propositions;
use crate::models::{FormulaFamily, SectionTag, TransitionSystem};

/// The outcomes of an action are mutually exclusive: whenever one
/// arrives next, the others do not. Degenerates to zero formulas for a
/// single outcome (the family still contributes its propositions).
pub fn outcome_mutex(actions: &[String], outcomes: &[String]) -> SpecResult<FormulaFamily> {
    let ctx = ActivationContext::new(actions, outcomes, TransitionSystem::empty())?;

    let mut formulas = Vec::new();
    if outcomes.len() == 1 {
        debug!(
            "no outcome mutex needed for {:?}: single outcome {:?}",
            actions, outcomes
        );
    } else {
        for outs in ctx.outcome_props().values() {
            for prop in outs {
                let next_neg_props: Vec<String> = outs
                    .iter()
                    .filter(|other| *other != prop)
                    .map(|other| ltl::next(&ltl::neg(other)))
                    .collect();

                formulas.push(ltl::implication(
                    &ltl::next(prop),
                    &ltl::conj(&next_neg_props),
                ));
            }
        }
    }

    Ok(FormulaFamily::new(
        SectionTag::EnvTrans,
        ctx.env_props().to_vec(),
        ctx.sys_props().to_vec(),
        formulas,
    ))
}

/// Safety assumptions constraining the outcomes of actions: an observed
/// outcome stays in the outcome set while the action is active, and an
/// unobserved outcome cannot appear while the action is inactive.
pub fn outcome_constraints(actions: &[String], outcomes: &[String]) -> SpecResult<FormulaFamily> {
    let ctx = ActivationContext::new(actions, outcomes, TransitionSystem::empty())?;

    let mut liveness_formulas = Vec::new();
    let mut inactivity_formulas = Vec::new();

    for (prop, outs) in ctx.outcome_props() {
        let act_prop = propositions::activation(prop)?;

        let lhs_disjunct = ltl::disj(outs);
        let left_hand_side = ltl::conj(&[lhs_disjunct, act_prop.clone()]);

        let rhs_props: Vec<String> = outs.iter().map(|out| ltl::next(out)).collect();
        let right_hand_side = ltl::disj(&rhs_props);

        liveness_formulas.push(ltl::implication(&left_hand_side, &right_hand_side));

        let not_act = ltl::neg(&act_prop);
        for out in outs {
            let not_out = ltl::neg(out);
            let left_hand_side = ltl::conj(&[not_out.clone(), not_act.clone()]);
            inactivity_formulas.push(ltl::implication(&left_hand_side, &ltl::next(&not_out)));
        }
    }

    liveness_formulas.extend(inactivity_formulas);

    Ok(FormulaFamily::new(
        SectionTag::EnvTrans,
        ctx.env_props().to_vec(),
        ctx.sys_props().to_vec(),
        liveness_formulas,
    ))
}

/// Action outcomes persist while the action is not re-activated.
pub fn outcome_persistence(actions: &[String], outcomes: &[String]) -> SpecResult<FormulaFamily> {
    let ctx = ActivationContext::new(actions, outcomes, TransitionSystem::empty())?;

    let mut formulas = Vec::new();
    for (prop, outs) in ctx.outcome_props() {
        let not_act = ltl::neg(&propositions::activation(prop)?);
        for out in outs {
            let left_hand_side = ltl::conj(&[out.clone(), not_act.clone()]);
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

/// An activation proposition is turned off as soon as any of its
/// outcomes is reported next.
pub fn deactivation(actions: &[String], outcomes: &[String]) -> SpecResult<FormulaFamily> {
    let ctx = ActivationContext::new(actions, outcomes, TransitionSystem::empty())?;

    let mut formulas = Vec::new();
    for (prop, outs) in ctx.outcome_props() {
        let next_outs: Vec<String> = outs.iter().map(|out| ltl::next(out)).collect();
        let out_disjunct = ltl::disj(&next_outs);

        let act_prop = propositions::activation(prop)?;
        let next_not_act = ltl::next(&ltl::neg(&act_prop));

        let left_hand_side = ltl::conj(&[act_prop, out_disjunct]);
        formulas.push(ltl::implication(&left_hand_side, &next_not_act));
    }

    Ok(FormulaFamily::new(
        SectionTag::SysTrans,
        ctx.env_props().to_vec(),
        ctx.sys_props().to_vec(),
        formulas,
    ))
}

/// Environment liveness assumptions ruling out environments that stall
/// forever on an activated action: infinitely often, either an outcome
/// resolves the action's current state, or the activation flips.
pub fn fairness(actions: &[String], outcomes: &[String]) -> SpecResult<FormulaFamily> {
    let ctx = ActivationContext::new(actions, outcomes, TransitionSystem::empty())?;

    let mut formulas = Vec::new();
    for (prop, outs) in ctx.outcome_props() {
        let act_prop = propositions::activation(prop)?;
        let not_act = ltl::neg(&act_prop);

        let next_outs: Vec<String> = outs.iter().map(|out| ltl::next(out)).collect();
        let out_disjunct = ltl::disj(&next_outs);
        let next_not_outs: Vec<String> =
            outs.iter().map(|out| ltl::next(&ltl::neg(out))).collect();
        let out_conjunct = ltl::conj(&next_not_outs);

        let resolved = ltl::conj(&[act_prop.clone(), out_disjunct.clone()]);
        let stable = ltl::conj(&[not_act.clone(), out_conjunct]);
        let residual = ltl::conj(&[not_act.clone(), out_disjunct]);
        let outcomes_formula = ltl::disj(&[resolved, stable, residual]);

        let dropped = ltl::conj(&[act_prop.clone(), ltl::next(&not_act)]);
        let raised = ltl::conj(&[not_act, ltl::next(&act_prop)]);
        let change_formula = ltl::disj(&[dropped, raised]);

        formulas.push(ltl::disj(&[outcomes_formula, change_formula]));
    }

    Ok(FormulaFamily::new(
        SectionTag::EnvLiveness,
        ctx.env_props().to_vec(),
        ctx.sys_props().to_vec(),
        formulas,
    ))
}

/// An action may only be activated once all of its preconditions have
/// completed: if any precondition's completion is false, the action's
/// activation is forced off.
pub fn preconditions(action: &str, precondition_actions: &[String]) -> SpecResult<FormulaFamily> {
    let action_prop = propositions::activation(action)?;
    let pc_props: Vec<String> = precondition_actions
        .iter()
        .map(|pc| propositions::completion(pc))
        .collect();

    let generator = Gr1Generator::new(
        pc_props.clone(),
        vec![action_prop.clone()],
        TransitionSystem::empty(),
    );
    let formula = generator.precondition_formula(&action_prop, &pc_props);

    Ok(FormulaFamily::new(
        SectionTag::SysTrans,
        pc_props,
        vec![action_prop],
        vec![formula],
    ))
}
