//! Formula families encoding when the system wins: the liveness
//! requirement itself, the goal-memory machinery feeding it, and the
//! failure latch.

use crate::errors::SpecResult;
use crate::formula::context::ActivationContext;
use crate::ltl;
use crate::models::propositions;
use crate::models::{FormulaFamily, SectionTag, TransitionSystem};

/// A single system liveness requirement: the conjunction (default) or
/// disjunction of the given goal propositions. Contributes no
/// propositions of its own; the goals are declared by the families that
/// drive them.
pub fn system_liveness(goals: &[String], disjunction: bool) -> FormulaFamily {
    let liveness_formula = if disjunction {
        ltl::disj(goals)
    } else {
        ltl::conj(goals)
    };

    FormulaFamily::new(
        SectionTag::SysLiveness,
        Vec::new(),
        Vec::new(),
        vec![liveness_formula],
    )
}

/// System requirement activating the success outcome once every goal's
/// completion has been observed at least once.
///
/// Per goal, a memory proposition is derived and the set/remembrance/
/// guard triple emitted; with `strict_order`, consecutive goals must be
/// remembered in order. A final condition ties the success proposition
/// to the conjunction of all memories.
pub fn successful_outcome(
    conditions: &[String],
    success: &str,
    strict_order: bool,
) -> SpecResult<FormulaFamily> {
    let ctx = ActivationContext::new(
        conditions,
        &["completed".to_string()],
        TransitionSystem::empty(),
    )?;

    let mut sys_props = ctx.sys_props().to_vec();
    let mut memory_props = Vec::with_capacity(conditions.len());
    let mut formulas = Vec::new();

    for goal in conditions {
        let goal_completion = propositions::completion(goal);
        let memory_prop = propositions::memory(goal);
        sys_props.push(memory_prop.clone());

        formulas.extend(memory_formulas(&memory_prop, &goal_completion));
        memory_props.push(memory_prop);
    }

    if strict_order {
        formulas.extend(goal_ordering_formulas(&memory_props));
    }

    sys_props.push(success.to_string());
    formulas.push(ctx.success_condition(&memory_props, success));

    Ok(FormulaFamily::new(
        SectionTag::SysTrans,
        ctx.env_props().to_vec(),
        sys_props,
        formulas,
    ))
}

/// System requirement latching the failure outcome once any of the
/// conditions' failure outcomes has been observed: once true, failure
/// never resets.
pub fn failed_outcome(conditions: &[String], failure: &str) -> SpecResult<FormulaFamily> {
    let ctx = ActivationContext::new(
        conditions,
        &[failure.to_string()],
        TransitionSystem::empty(),
    )?;

    let mut sys_props = ctx.sys_props().to_vec();
    sys_props.push(failure.to_string());

    let next_conditions: Vec<String> =
        ctx.env_props().iter().map(|out| ltl::next(out)).collect();
    let conditions_disjunct = ltl::disj(&next_conditions);
    let disjunction = ltl::disj(&[conditions_disjunct, failure.to_string()]);

    let failure_condition = ltl::iff(&ltl::next(failure), &disjunction);

    Ok(FormulaFamily::new(
        SectionTag::SysTrans,
        ctx.env_props().to_vec(),
        sys_props,
        vec![failure_condition],
    ))
}

/// The future-tense memory triple for one goal: the memory is set the
/// moment the completion is observed, persists forever after, and stays
/// false otherwise.
fn memory_formulas(memory_prop: &str, goal_completion: &str) -> Vec<String> {
    let set_mem_formula = ltl::implication(&ltl::next(goal_completion), &ltl::next(memory_prop));
    let remembrance_formula = ltl::implication(memory_prop, &ltl::next(memory_prop));
    let precondition = ltl::conj(&[
        ltl::neg(memory_prop),
        ltl::next(&ltl::neg(goal_completion)),
    ]);
    let guard_formula = ltl::implication(&precondition, &ltl::next(&ltl::neg(memory_prop)));

    vec![set_mem_formula, remembrance_formula, guard_formula]
}

/// A goal's memory cannot be set before its predecessor's.
fn goal_ordering_formulas(memory_props: &[String]) -> Vec<String> {
    memory_props
        .windows(2)
        .map(|pair| {
            ltl::implication(&ltl::neg(&pair[0]), &ltl::next(&ltl::neg(&pair[1])))
        })
        .collect()
}
