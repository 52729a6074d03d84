//! Generic GR(1) formula templates over plain environment and system
//! propositions, before the activation-outcomes paradigm is layered on
//! top.

use crate::errors::{SpecError, SpecResult};
use crate::ltl;
use crate::models::propositions;
use crate::models::TransitionSystem;

/// Holds the environment and system proposition sets and an optional
/// transition system, and generates the formula templates shared by all
/// paradigms: mutual exclusion, the adjacency relation, precondition
/// implications, success conditions, and goal-memory formulas.
///
/// The system propositions are augmented with every transition-system
/// region. All iteration follows caller-supplied insertion order; the
/// generated formula lists are order-sensitive output.
#[derive(Debug, Clone, Default)]
pub struct Gr1Generator {
    env_props: Vec<String>,
    sys_props: Vec<String>,
    ts: TransitionSystem,
}

impl Gr1Generator {
    pub fn new(env_props: Vec<String>, sys_props: Vec<String>, ts: TransitionSystem) -> Self {
        let mut generator = Self {
            env_props,
            sys_props,
            ts,
        };
        generator.add_props_from_ts();
        generator
    }

    pub fn env_props(&self) -> &[String] {
        &self.env_props
    }

    pub fn sys_props(&self) -> &[String] {
        &self.sys_props
    }

    pub fn ts(&self) -> &TransitionSystem {
        &self.ts
    }

    /// Append a system proposition unless it is already present.
    pub fn add_sys_prop(&mut self, prop: String) {
        if !self.sys_props.contains(&prop) {
            self.sys_props.push(prop);
        }
    }

    /// Mutual exclusion between the given propositions: each one implies
    /// the negation of all the others. With `future`, both sides are
    /// primed with `next`. A singleton group is vacuous and yields no
    /// formulas.
    pub fn mutex_formulas(&self, mutex_props: &[String], future: bool) -> Vec<String> {
        let mut mutex_formulas = Vec::new();

        if mutex_props.len() < 2 {
            return mutex_formulas;
        }

        for prop in mutex_props {
            let negated_props: Vec<String> = mutex_props
                .iter()
                .filter(|other| *other != prop)
                .map(|other| {
                    if future {
                        ltl::neg(&ltl::next(other))
                    } else {
                        ltl::neg(other)
                    }
                })
                .collect();

            let left_hand_side = if future { ltl::next(prop) } else { prop.clone() };
            let right_hand_side = ltl::conj(&negated_props);

            mutex_formulas.push(ltl::iff(&left_hand_side, &right_hand_side));
        }

        mutex_formulas
    }

    /// The adjacency relation of the transition system: being in a
    /// region implies moving to one of its adjacent regions (in
    /// mutex-annotated form) in the next step.
    pub fn transition_formulas(&self, future: bool) -> SpecResult<Vec<String>> {
        let mut transition_formulas = Vec::new();

        for (region, adjacent) in self.ts.iter() {
            let mut right_hand_side = Vec::new();
            for adj_prop in adjacent {
                let adj_phi_prop = self.phi_prop(adj_prop)?;
                let disjunct = if future {
                    ltl::next(&adj_phi_prop)
                } else {
                    adj_phi_prop
                };
                right_hand_side.push(disjunct);
            }

            transition_formulas.push(ltl::implication(region, &ltl::disj(&right_hand_side)));
        }

        Ok(transition_formulas)
    }

    /// Conditions that have to hold for an action proposition to be
    /// allowed: if any precondition is false, the action is off.
    pub fn precondition_formula(&self, action: &str, preconditions: &[String]) -> String {
        let neg_preconditions: Vec<String> =
            preconditions.iter().map(|pc| ltl::neg(pc)).collect();

        ltl::implication(&ltl::disj(&neg_preconditions), &ltl::neg(action))
    }

    /// The success proposition is true exactly when all memory
    /// propositions have been set.
    pub fn success_condition(&self, mem_props: &[String], success: &str) -> String {
        ltl::iff(success, &ltl::conj(mem_props))
    }

    /// For a desired objective, derive a memory proposition and the
    /// formulas for remembering its achievement: set, remembrance, and
    /// the guard keeping the memory false until the goal is observed.
    /// The memory proposition joins the system propositions.
    pub fn goal_memory_formulas(&mut self, goal: &str) -> (String, Vec<String>) {
        let mem_prop = propositions::memory(goal);
        self.add_sys_prop(mem_prop.clone());

        let set_mem_formula = ltl::implication(goal, &ltl::next(&mem_prop));
        let remembrance_formula = ltl::implication(&mem_prop, &ltl::next(&mem_prop));
        let precondition = ltl::conj(&[ltl::neg(&mem_prop), ltl::neg(goal)]);
        let guard_formula = ltl::implication(&precondition, &ltl::next(&ltl::neg(&mem_prop)));

        (
            mem_prop,
            vec![set_mem_formula, remembrance_formula, guard_formula],
        )
    }

    /// The mutex-annotated (non-atomic) version of a proposition: the
    /// proposition conjoined with the negation of every other
    /// proposition of its group.
    pub fn phi_prop(&self, prop: &str) -> SpecResult<String> {
        let mut props_in_phi = vec![prop.to_string()];
        for other_prop in self.other_group_props(prop)? {
            props_in_phi.push(ltl::neg(other_prop));
        }
        Ok(ltl::conj(&props_in_phi))
    }

    /// All propositions sharing a group (system or environment) with the
    /// given one. A proposition in neither set is a fatal lookup error.
    fn other_group_props(&self, prop: &str) -> SpecResult<Vec<&String>> {
        let group = if self.sys_props.iter().any(|p| p.as_str() == prop) {
            &self.sys_props
        } else if self.env_props.iter().any(|p| p.as_str() == prop) {
            &self.env_props
        } else {
            return Err(SpecError::UnknownProposition(prop.to_string()));
        };

        Ok(group.iter().filter(|p| p.as_str() != prop).collect())
    }

    /// Add every transition-system region to the system propositions,
    /// first occurrence winning. Adjacency is closed, so the keys cover
    /// every target.
    fn add_props_from_ts(&mut self) {
        let regions: Vec<String> = self.ts.regions().map(str::to_string).collect();
        for region in regions {
            self.add_sys_prop(region);
        }
    }
}
