#[cfg(test)]
mod tests {
    use crate::errors::SpecError;
    use crate::formula::action;
    use crate::formula::context::ActivationContext;
    use crate::models::{SectionTag, TransitionSystem};
    use crate::tests::props;

    fn outcomes_cfp() -> Vec<String> {
        props(&["completed", "failed", "preempted"])
    }

    #[test]
    fn test_context_propositions() {
        let ctx = ActivationContext::new(
            &props(&["dance", "sleep"]),
            &outcomes_cfp(),
            TransitionSystem::empty(),
        )
        .unwrap();

        assert_eq!(ctx.outcomes(), outcomes_cfp().as_slice());
        assert_eq!(ctx.sys_props(), props(&["dance_a", "sleep_a"]).as_slice());
        assert_eq!(
            ctx.env_props(),
            props(&["dance_c", "dance_f", "dance_p", "sleep_c", "sleep_f", "sleep_p"]).as_slice()
        );
        assert_eq!(
            ctx.outcome_props()["dance"],
            props(&["dance_c", "dance_f", "dance_p"])
        );
    }

    #[test]
    fn test_outcome_props_are_one_per_label() {
        let ctx = ActivationContext::new(
            &props(&["dance"]),
            &outcomes_cfp(),
            TransitionSystem::empty(),
        )
        .unwrap();

        assert_eq!(ctx.outcome_props()["dance"].len(), 3);
    }

    #[test]
    fn test_context_rejects_activation_props() {
        let err = ActivationContext::new(
            &props(&["dance_a"]),
            &props(&["completed"]),
            TransitionSystem::empty(),
        )
        .unwrap_err();

        assert!(matches!(err, SpecError::InvalidProposition(_)));
    }

    #[test]
    fn test_context_rejects_empty_outcomes() {
        let err =
            ActivationContext::new(&props(&["dance"]), &[], TransitionSystem::empty())
                .unwrap_err();

        assert!(matches!(err, SpecError::InvalidOutcomes(_)));
    }

    #[test]
    fn test_context_rejects_colliding_outcome_initials() {
        let err = ActivationContext::new(
            &props(&["dance"]),
            &props(&["completed", "capitalized", "called"]),
            TransitionSystem::empty(),
        )
        .unwrap_err();

        assert!(matches!(err, SpecError::InvalidOutcomes(_)));
    }

    #[test]
    fn test_distinct_initials_never_fail() {
        // Any outcome set with pairwise-distinct first characters is
        // accepted, however exotic.
        for outcomes in [
            props(&["completed"]),
            props(&["done", "aborted"]),
            props(&["x", "y", "z", "w"]),
        ] {
            assert!(ActivationContext::new(
                &props(&["dance"]),
                &outcomes,
                TransitionSystem::empty()
            )
            .is_ok());
        }
    }

    #[test]
    fn test_outcome_mutex_formulas() {
        let family = action::outcome_mutex(&props(&["dance"]), &outcomes_cfp()).unwrap();

        assert_eq!(family.section, SectionTag::EnvTrans);
        assert_eq!(
            family.formulas,
            vec![
                "next(dance_c) -> (next(! dance_f) & next(! dance_p))",
                "next(dance_f) -> (next(! dance_c) & next(! dance_p))",
                "next(dance_p) -> (next(! dance_c) & next(! dance_f))",
            ]
        );
    }

    #[test]
    fn test_outcome_mutex_single_outcome_is_empty() {
        let family =
            action::outcome_mutex(&props(&["dance"]), &props(&["completed"])).unwrap();

        assert!(family.formulas.is_empty());
        // The family still declares its propositions.
        assert_eq!(family.env_props, props(&["dance_c"]));
        assert_eq!(family.sys_props, props(&["dance_a"]));
    }

    #[test]
    fn test_outcome_constraints() {
        let family = action::outcome_constraints(
            &props(&["dance"]),
            &props(&["completed", "failed"]),
        )
        .unwrap();

        assert_eq!(family.section, SectionTag::EnvTrans);
        assert_eq!(
            family.formulas,
            vec![
                "((dance_c | dance_f) & dance_a) -> (next(dance_c) | next(dance_f))",
                "(! dance_c & ! dance_a) -> next(! dance_c)",
                "(! dance_f & ! dance_a) -> next(! dance_f)",
            ]
        );
    }

    #[test]
    fn test_outcome_persistence() {
        let family = action::outcome_persistence(
            &props(&["dance"]),
            &props(&["completed", "failed"]),
        )
        .unwrap();

        assert_eq!(family.section, SectionTag::EnvTrans);
        assert_eq!(
            family.formulas,
            vec![
                "(dance_c & ! dance_a) -> next(dance_c)",
                "(dance_f & ! dance_a) -> next(dance_f)",
            ]
        );
    }

    #[test]
    fn test_deactivation_single_outcome() {
        let family =
            action::deactivation(&props(&["dance", "sleep"]), &props(&["completed"])).unwrap();

        assert_eq!(
            family.formulas,
            vec![
                "(dance_a & next(dance_c)) -> next(! dance_a)",
                "(sleep_a & next(sleep_c)) -> next(! sleep_a)",
            ]
        );
    }

    #[test]
    fn test_deactivation_multiple_outcomes() {
        let family = action::deactivation(
            &props(&["dance", "sleep"]),
            &props(&["completed", "failed"]),
        )
        .unwrap();

        assert_eq!(family.section, SectionTag::SysTrans);
        assert_eq!(
            family.formulas,
            vec![
                "(dance_a & (next(dance_c) | next(dance_f))) -> next(! dance_a)",
                "(sleep_a & (next(sleep_c) | next(sleep_f))) -> next(! sleep_a)",
            ]
        );
    }

    #[test]
    fn test_fairness_conditions() {
        let family =
            action::fairness(&props(&["dance"]), &props(&["completed", "failed"])).unwrap();

        let outcome_part = "((dance_a & (next(dance_c) | next(dance_f))) \
             | (! dance_a & (next(! dance_c) & next(! dance_f))) \
             | (! dance_a & (next(dance_c) | next(dance_f))))";
        let change_part = "((dance_a & next(! dance_a)) | (! dance_a & next(dance_a)))";
        let expected = format!("({} | {})", outcome_part, change_part);

        assert_eq!(family.section, SectionTag::EnvLiveness);
        assert_eq!(family.formulas, vec![expected]);
    }

    #[test]
    fn test_preconditions_formula() {
        let family = action::preconditions("run", &props(&["step", "walk"])).unwrap();

        assert_eq!(family.section, SectionTag::SysTrans);
        assert_eq!(family.env_props, props(&["step_c", "walk_c"]));
        assert_eq!(family.sys_props, props(&["run_a"]));
        assert_eq!(family.formulas, vec!["(! step_c | ! walk_c) -> ! run_a"]);
    }
}
