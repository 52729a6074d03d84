//! The six canonical GR(1) sections and the formula-family value object
//! that every generator produces.

use std::fmt;
use std::str::FromStr;

use crate::errors::SpecError;

/// One of the six groups of a GR(1) specification: environment/system
/// crossed with initial conditions, safety, and liveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionTag {
    SysInit,
    EnvInit,
    SysTrans,
    EnvTrans,
    SysLiveness,
    EnvLiveness,
}

impl SectionTag {
    pub const ALL: [SectionTag; 6] = [
        SectionTag::SysInit,
        SectionTag::EnvInit,
        SectionTag::SysTrans,
        SectionTag::EnvTrans,
        SectionTag::SysLiveness,
        SectionTag::EnvLiveness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionTag::SysInit => "sys_init",
            SectionTag::EnvInit => "env_init",
            SectionTag::SysTrans => "sys_trans",
            SectionTag::EnvTrans => "env_trans",
            SectionTag::SysLiveness => "sys_liveness",
            SectionTag::EnvLiveness => "env_liveness",
        }
    }

    /// The section header used in the structured-slugs file format.
    pub fn header(&self) -> &'static str {
        match self {
            SectionTag::SysInit => "[SYS_INIT]",
            SectionTag::EnvInit => "[ENV_INIT]",
            SectionTag::SysTrans => "[SYS_TRANS]",
            SectionTag::EnvTrans => "[ENV_TRANS]",
            SectionTag::SysLiveness => "[SYS_LIVENESS]",
            SectionTag::EnvLiveness => "[ENV_LIVENESS]",
        }
    }
}

impl fmt::Display for SectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionTag {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| SpecError::UnknownSection(s.to_string()))
    }
}

/// The immutable result of one formula-paradigm invocation: the section
/// it belongs to, the propositions it contributes, and its formulas in
/// generation order. Constructed in one step, never partially
/// initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaFamily {
    pub section: SectionTag,
    pub env_props: Vec<String>,
    pub sys_props: Vec<String>,
    pub formulas: Vec<String>,
}

impl FormulaFamily {
    pub fn new(
        section: SectionTag,
        env_props: Vec<String>,
        sys_props: Vec<String>,
        formulas: Vec<String>,
    ) -> Self {
        Self {
            section,
            env_props,
            sys_props,
            formulas,
        }
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}
