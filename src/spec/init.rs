//! Specification of the initial conditions, derived from the
//! propositions another specification has accumulated.

use crate::errors::SpecResult;
use crate::formula::init;
use crate::spec::gr1::Gr1Specification;

/// Builds the initial-condition part of an agent specification.
#[derive(Debug, Default)]
pub struct InitialConditionsSpecification {
    spec: Gr1Specification,
}

impl InitialConditionsSpecification {
    pub fn new(name: &str) -> Self {
        Self {
            spec: Gr1Specification::new(name),
        }
    }

    pub fn spec(&self) -> &Gr1Specification {
        &self.spec
    }

    pub fn into_spec(self) -> Gr1Specification {
        self.spec
    }

    /// Use the propositions of another specification to generate the
    /// system and environment initial-condition formulas: every
    /// activation proposition starts false, and an outcome proposition
    /// starts true exactly when its base name is in `true_props`.
    pub fn set_from_spec(
        &mut self,
        other: &Gr1Specification,
        true_props: &[String],
    ) -> SpecResult<()> {
        let sys_props: Vec<String> = other.sys_props().iter().cloned().collect();
        let env_props: Vec<String> = other.env_props().iter().cloned().collect();

        let sys_family = init::system_initial_conditions(&sys_props, &[])?;
        let env_family = init::environment_initial_conditions(&env_props, true_props);

        self.spec.load_families([sys_family, env_family]);

        Ok(())
    }
}
