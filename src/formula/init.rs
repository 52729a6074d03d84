//! Initial-condition formula families: one literal per proposition.

use crate::errors::SpecResult;
use crate::ltl;
use crate::models::propositions;
use crate::models::{FormulaFamily, SectionTag};

/// System initial conditions over the given system propositions: a
/// proposition starts true exactly when it is the activation form of
/// one of the `true_props` base names; everything else starts false.
/// The top-level builders pass an empty true set, forcing every
/// activation off initially.
pub fn system_initial_conditions(
    sys_props: &[String],
    true_props: &[String],
) -> SpecResult<FormulaFamily> {
    let true_act_props = true_props
        .iter()
        .map(|prop| propositions::activation(prop))
        .collect::<SpecResult<Vec<String>>>()?;

    let formulas = sys_props
        .iter()
        .map(|prop| {
            if true_act_props.contains(prop) {
                prop.clone()
            } else {
                ltl::neg(prop)
            }
        })
        .collect();

    Ok(FormulaFamily::new(
        SectionTag::SysInit,
        Vec::new(),
        sys_props.to_vec(),
        formulas,
    ))
}

/// Environment initial conditions over the given environment
/// propositions: an outcome proposition starts true exactly when it is
/// the completion form of one of the `true_props` base names.
pub fn environment_initial_conditions(
    env_props: &[String],
    true_props: &[String],
) -> FormulaFamily {
    let true_com_props: Vec<String> = true_props
        .iter()
        .map(|prop| propositions::completion(prop))
        .collect();

    let formulas = env_props
        .iter()
        .map(|prop| {
            if true_com_props.contains(prop) {
                prop.clone()
            } else {
                ltl::neg(prop)
            }
        })
        .collect();

    FormulaFamily::new(
        SectionTag::EnvInit,
        env_props.to_vec(),
        Vec::new(),
        formulas,
    )
}
