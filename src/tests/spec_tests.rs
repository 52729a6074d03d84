#[cfg(test)]
mod tests {
    use std::fs;

    use indexmap::IndexMap;

    use crate::config::AgentConfiguration;
    use crate::errors::SpecError;
    use crate::models::{FormulaFamily, SectionTag, TransitionSystem};
    use crate::spec::{
        ActionSpecification, AgentSpecification, AgentSpecificationOptions, GoalSpecification,
        Gr1Specification, InitialConditionsSpecification, TransitionSystemSpecification,
    };
    use crate::tests::props;

    fn family(section: SectionTag, formulas: &[&str]) -> FormulaFamily {
        FormulaFamily::new(section, Vec::new(), Vec::new(), props(formulas))
    }

    #[test]
    fn test_load_grows_exactly_one_buffer() {
        let mut spec = Gr1Specification::new("test");

        spec.load(FormulaFamily::new(
            SectionTag::EnvTrans,
            props(&["x1"]),
            props(&["y1"]),
            props(&["x1 -> y1", "y1 -> x1"]),
        ));

        assert_eq!(spec.section(SectionTag::EnvTrans).len(), 2);
        for tag in SectionTag::ALL {
            if tag != SectionTag::EnvTrans {
                assert!(spec.section(tag).is_empty());
            }
        }
        assert!(spec.env_props().contains("x1"));
        assert!(spec.sys_props().contains("y1"));
    }

    #[test]
    fn test_load_deduplicates_propositions() {
        let mut spec = Gr1Specification::with_props("test", props(&["x1"]), props(&["y1"]));

        spec.load(FormulaFamily::new(
            SectionTag::SysTrans,
            props(&["x1", "x2"]),
            props(&["y1"]),
            Vec::new(),
        ));

        assert_eq!(
            spec.env_props().iter().cloned().collect::<Vec<_>>(),
            props(&["x1", "x2"])
        );
        assert_eq!(
            spec.sys_props().iter().cloned().collect::<Vec<_>>(),
            props(&["y1"])
        );
    }

    #[test]
    fn test_merge_order_is_observable() {
        let mut a = Gr1Specification::new("a");
        a.load(family(SectionTag::SysTrans, &["from_a"]));
        let mut b = Gr1Specification::new("b");
        b.load(family(SectionTag::SysTrans, &["from_b"]));

        let mut ab = Gr1Specification::new("ab");
        ab.merge([a.clone(), b.clone()]);
        let mut ba = Gr1Specification::new("ba");
        ba.merge([b, a]);

        assert_eq!(ab.section(SectionTag::SysTrans), &["from_a", "from_b"]);
        assert_eq!(ba.section(SectionTag::SysTrans), &["from_b", "from_a"]);
    }

    #[test]
    fn test_merge_unions_propositions() {
        let mut a = Gr1Specification::with_props("a", props(&["x1", "x2"]), props(&["y1"]));
        let b = Gr1Specification::with_props("b", props(&["x2", "x3"]), props(&["y2"]));

        a.merge([b]);

        assert_eq!(
            a.env_props().iter().cloned().collect::<Vec<_>>(),
            props(&["x1", "x2", "x3"])
        );
        assert_eq!(
            a.sys_props().iter().cloned().collect::<Vec<_>>(),
            props(&["y1", "y2"])
        );
    }

    #[test]
    fn test_render_has_all_eight_sections() {
        let mut spec = Gr1Specification::with_props("test", props(&["x"]), props(&["y1", "y2"]));
        spec.load(family(SectionTag::SysLiveness, &["y1"]));

        let rendered = spec.render();

        let expected_order = [
            "[INPUT]",
            "[OUTPUT]",
            "[SYS_INIT]",
            "[ENV_INIT]",
            "[SYS_TRANS]",
            "[ENV_TRANS]",
            "[SYS_LIVENESS]",
            "[ENV_LIVENESS]",
        ];
        let mut last = 0;
        for header in expected_order {
            let at = rendered.find(header).expect(header);
            assert!(at >= last, "{} out of order", header);
            last = at;
        }

        assert!(rendered.contains("[INPUT]\nx\n"));
        assert!(rendered.contains("[OUTPUT]\ny1\ny2\n"));
        assert!(rendered.contains("[SYS_LIVENESS]\ny1\n"));
    }

    #[test]
    fn test_write_structured_slugs_file() {
        let mut spec = Gr1Specification::with_props(
            "writer_check",
            props(&["x"]),
            props(&["y1", "y2"]),
        );
        spec.load(family(SectionTag::SysLiveness, &["y1"]));

        let folder = std::env::temp_dir().join("gr1spec_writer_check");
        let (file_path, spec_dir) = spec.write_structured_slugs(&folder).unwrap();

        assert!(file_path.ends_with("writer_check/writer_check.structuredslugs"));
        let contents = fs::read_to_string(&file_path).unwrap();
        assert!(contents.starts_with("[INPUT]\n"));
        assert!(spec_dir.join("metadata.json").is_file());

        fs::remove_dir_all(&folder).unwrap();
    }

    fn precondition_graph() -> IndexMap<String, Vec<String>> {
        let mut preconditions = IndexMap::new();
        preconditions.insert("run".to_string(), props(&["step", "walk"]));
        preconditions.insert("bar".to_string(), props(&["foo"]));
        preconditions.insert("fu".to_string(), props(&["bar"]));
        preconditions.insert("foo".to_string(), Vec::new());
        preconditions
    }

    #[test]
    fn test_action_without_preconditions() {
        let mut spec = ActionSpecification::new("test", precondition_graph());
        spec.handle_new_action("foo", &props(&["completed"])).unwrap();

        // Only the deactivation formula lands in sys_trans.
        assert_eq!(
            spec.spec().section(SectionTag::SysTrans),
            &["(foo_a & next(foo_c)) -> next(! foo_a)"]
        );
    }

    #[test]
    fn test_action_not_in_precondition_graph() {
        let mut spec = ActionSpecification::new("test", precondition_graph());
        spec.handle_new_action("jump", &props(&["completed"])).unwrap();

        assert_eq!(spec.spec().section(SectionTag::SysTrans).len(), 1);
    }

    #[test]
    fn test_recursive_preconditions() {
        let mut spec = ActionSpecification::new("test", precondition_graph());
        spec.handle_new_action("fu", &props(&["completed"])).unwrap();

        let sys_trans = spec.spec().section(SectionTag::SysTrans);

        assert!(sys_trans.contains(&"! foo_c -> ! bar_a".to_string()));
        assert!(sys_trans.contains(&"! bar_c -> ! fu_a".to_string()));
        // Two precondition formulas plus three deactivations.
        assert_eq!(sys_trans.len(), 5);
        assert_eq!(
            spec.handled_actions().iter().cloned().collect::<Vec<_>>(),
            props(&["fu", "bar", "foo"])
        );
    }

    #[test]
    fn test_recursive_expansion_of_precondition_chain() {
        let mut graph = IndexMap::new();
        graph.insert("run".to_string(), props(&["step", "walk"]));
        graph.insert("walk".to_string(), props(&["prep"]));

        let mut spec = ActionSpecification::new("test", graph);
        spec.handle_new_action("run", &props(&["completed"])).unwrap();

        let sys_trans = spec.spec().section(SectionTag::SysTrans);
        assert!(sys_trans.contains(&"(! step_c | ! walk_c) -> ! run_a".to_string()));
        assert!(sys_trans.contains(&"! prep_c -> ! walk_a".to_string()));
    }

    #[test]
    fn test_handling_is_memoized() {
        let mut spec = ActionSpecification::new("test", precondition_graph());
        spec.handle_new_action("run", &props(&["completed"])).unwrap();
        let before = spec.spec().section(SectionTag::SysTrans).len();

        spec.handle_new_action("run", &props(&["completed"])).unwrap();

        assert_eq!(spec.spec().section(SectionTag::SysTrans).len(), before);
    }

    #[test]
    fn test_handle_action_with_multiple_preconditions() {
        let mut spec = ActionSpecification::new("test", precondition_graph());
        spec.handle_new_action("run", &props(&["completed"])).unwrap();

        assert_eq!(
            spec.spec().section(SectionTag::EnvTrans),
            &[
                "(run_c & run_a) -> next(run_c)",
                "(! run_c & ! run_a) -> next(! run_c)",
                "(run_c & ! run_a) -> next(run_c)",
            ]
        );
        assert_eq!(
            spec.spec().section(SectionTag::SysTrans),
            &[
                "(! step_c | ! walk_c) -> ! run_a",
                "(run_a & next(run_c)) -> next(! run_a)",
            ]
        );
        assert_eq!(spec.spec().section(SectionTag::EnvLiveness).len(), 1);
    }

    #[test]
    fn test_handle_action_with_multiple_outcomes() {
        let mut spec = ActionSpecification::new("test", precondition_graph());
        spec.handle_new_action("run", &props(&["completed", "failed"]))
            .unwrap();

        assert_eq!(
            spec.spec().section(SectionTag::EnvTrans),
            &[
                "next(run_c) -> next(! run_f)",
                "next(run_f) -> next(! run_c)",
                "((run_c | run_f) & run_a) -> (next(run_c) | next(run_f))",
                "(! run_c & ! run_a) -> next(! run_c)",
                "(! run_f & ! run_a) -> next(! run_f)",
                "(run_c & ! run_a) -> next(run_c)",
                "(run_f & ! run_a) -> next(run_f)",
            ]
        );
        assert_eq!(
            spec.spec().section(SectionTag::SysTrans),
            &[
                "(! step_c | ! walk_c) -> ! run_a",
                "(run_a & (next(run_c) | next(run_f))) -> next(! run_a)",
            ]
        );
    }

    fn workspace() -> TransitionSystem {
        TransitionSystem::from_pairs([
            ("r1", &["r1", "r2", "r3"][..]),
            ("r2", &["r2"][..]),
            ("r3", &["r3", "r1"][..]),
        ])
        .unwrap()
    }

    #[test]
    fn test_topology_specification_sections() {
        let spec = TransitionSystemSpecification::new(
            "test",
            &workspace(),
            &[],
            &props(&["completed", "failed"]),
        )
        .unwrap();

        let sys_trans = spec.spec().section(SectionTag::SysTrans);
        assert_eq!(sys_trans.len(), 6);
        assert!(sys_trans
            .contains(&"(r1_a & (next(r1_c) | next(r1_f))) -> next(! r1_a)".to_string()));

        // Mutex (3) + single-step change (6) + persistence (6)
        // + outcome constraints (6) + outcome mutex (6).
        assert_eq!(spec.spec().section(SectionTag::EnvTrans).len(), 27);
        assert_eq!(spec.spec().section(SectionTag::EnvLiveness).len(), 1);

        assert!(spec.spec().sys_props().contains("r1_a"));
        assert!(spec.spec().env_props().contains("r3_f"));
    }

    #[test]
    fn test_topology_specification_restriction() {
        let spec = TransitionSystemSpecification::new(
            "test",
            &workspace(),
            &props(&["r1", "r3"]),
            &props(&["completed"]),
        )
        .unwrap();

        let expected = TransitionSystem::from_pairs([
            ("r1", &["r1", "r3"][..]),
            ("r3", &["r3", "r1"][..]),
        ])
        .unwrap();

        assert_eq!(spec.ts(), &expected);
        assert!(!spec.spec().sys_props().contains("r2_a"));
    }

    #[test]
    fn test_goal_specification_single_goal() {
        let mut spec = GoalSpecification::new("test");
        spec.handle_single_liveness(&props(&["dance"]), &props(&["finished"]), false)
            .unwrap();

        assert_eq!(
            spec.spec().section(SectionTag::SysTrans),
            &[
                "next(dance_c) -> next(dance_m)",
                "dance_m -> next(dance_m)",
                "(! dance_m & next(! dance_c)) -> next(! dance_m)",
                "finished <-> dance_m",
            ]
        );
        assert_eq!(spec.spec().section(SectionTag::SysLiveness), &["finished"]);
    }

    #[test]
    fn test_goal_specification_with_failure() {
        let mut spec = GoalSpecification::new("test");
        spec.handle_single_liveness(&props(&["dance"]), &props(&["finished", "failed"]), false)
            .unwrap();
        spec.handle_any_failure(&props(&["dance"]), "failed").unwrap();

        assert_eq!(
            spec.spec().section(SectionTag::SysLiveness),
            &["(finished | failed)"]
        );
        assert_eq!(
            spec.spec().section(SectionTag::SysTrans),
            &[
                "next(dance_c) -> next(dance_m)",
                "dance_m -> next(dance_m)",
                "(! dance_m & next(! dance_c)) -> next(! dance_m)",
                "finished <-> dance_m",
                "next(failed) <-> (next(dance_f) | failed)",
            ]
        );
    }

    #[test]
    fn test_goal_specification_strict_order() {
        let mut spec = GoalSpecification::new("test");
        spec.handle_single_liveness(
            &props(&["dance", "sleep", "swim"]),
            &props(&["finished"]),
            true,
        )
        .unwrap();

        let sys_trans = spec.spec().section(SectionTag::SysTrans);
        assert!(sys_trans.contains(&"! dance_m -> next(! sleep_m)".to_string()));
        assert!(sys_trans.contains(&"! sleep_m -> next(! swim_m)".to_string()));
    }

    #[test]
    fn test_goal_specification_rejects_bad_outcome_counts() {
        let mut spec = GoalSpecification::new("test");

        let err = spec
            .handle_single_liveness(&props(&["dance"]), &[], false)
            .unwrap_err();
        assert!(matches!(err, SpecError::Unsupported(_)));

        let err = spec
            .handle_single_liveness(
                &props(&["dance"]),
                &props(&["finished", "failed", "thats_too_much"]),
                false,
            )
            .unwrap_err();
        assert!(matches!(err, SpecError::Unsupported(_)));

        // Nothing was loaded by the failed calls.
        assert!(spec.spec().section(SectionTag::SysTrans).is_empty());
        assert!(spec.spec().section(SectionTag::SysLiveness).is_empty());
    }

    #[test]
    fn test_initial_conditions_from_other_spec() {
        let mut other = ActionSpecification::new("test", IndexMap::new());
        other.handle_new_action("foo", &props(&["completed"])).unwrap();
        other.handle_new_action("bar", &props(&["completed"])).unwrap();

        let mut ic_spec = InitialConditionsSpecification::new("test");
        ic_spec
            .set_from_spec(other.spec(), &props(&["foo"]))
            .unwrap();

        assert_eq!(
            ic_spec.spec().section(SectionTag::SysInit),
            &["! foo_a", "! bar_a"]
        );
        assert_eq!(
            ic_spec.spec().section(SectionTag::EnvInit),
            &["foo_c", "! bar_c"]
        );
    }

    fn agent_config() -> AgentConfiguration {
        AgentConfiguration {
            ts: TransitionSystem::from_pairs([
                ("r1", &["r1", "r2"][..]),
                ("r2", &["r2", "r1"][..]),
            ])
            .unwrap(),
            preconditions: IndexMap::new(),
        }
    }

    #[test]
    fn test_complete_agent_specification() {
        let spec = AgentSpecification::build(
            "agent_example",
            &agent_config(),
            &props(&["r1"]),
            &props(&["grasp"]),
            &AgentSpecificationOptions::default(),
        )
        .unwrap();

        assert_eq!(
            spec.section(SectionTag::SysLiveness),
            &["(finished | failed)"]
        );

        let sys_trans = spec.section(SectionTag::SysTrans);
        assert!(sys_trans.contains(&"finished <-> grasp_m".to_string()));
        assert!(sys_trans.contains(
            &"next(failed) <-> ((next(r1_f) | next(r2_f) | next(grasp_f)) | failed)".to_string()
        ));

        assert_eq!(
            spec.section(SectionTag::SysInit),
            &[
                "! r1_a",
                "! r2_a",
                "! grasp_a",
                "! grasp_m",
                "! finished",
                "! failed",
            ]
        );
        // Env props accumulate completion props first (from the
        // single-outcome topology families), then the failure props.
        assert_eq!(
            spec.section(SectionTag::EnvInit),
            &["r1_c", "! r2_c", "! r1_f", "! r2_f", "! grasp_c", "! grasp_f"]
        );
    }

    #[test]
    fn test_agent_specification_rejects_outcome_mismatch() {
        let options = AgentSpecificationOptions {
            action_outcomes: props(&["completed", "failed"]),
            sm_outcomes: props(&["finished"]),
            ..Default::default()
        };

        let err = AgentSpecification::build(
            "agent_example",
            &agent_config(),
            &[],
            &props(&["grasp"]),
            &options,
        )
        .unwrap_err();

        assert!(matches!(err, SpecError::Unsupported(_)));
    }

    #[test]
    fn test_configuration_from_yaml() {
        let yaml = "\
transition_system:
  r1: [r1, r2]
  r2: [r2]
action_preconditions:
  run: [step, walk]
  foo:
";
        let config = AgentConfiguration::from_yaml(yaml).unwrap();

        assert_eq!(
            config.ts.regions().collect::<Vec<_>>(),
            vec!["r1", "r2"]
        );
        assert_eq!(config.preconditions["run"], props(&["step", "walk"]));
        assert!(config.preconditions["foo"].is_empty());
    }

    #[test]
    fn test_missing_configuration_degrades_to_empty() {
        let config =
            AgentConfiguration::load("no_such_agent", std::path::Path::new("/nonexistent"));

        assert!(config.ts.is_empty());
        assert!(config.preconditions.is_empty());
    }
}
