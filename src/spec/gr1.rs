//! The GR(1) specification accumulator.
//!
//! A specification owns the deduplicated environment/system proposition
//! sets and the six ordered formula buffers. Formula families are added
//! with [`Gr1Specification::load`]; whole specifications are combined
//! with [`Gr1Specification::merge`]. Serialization to the
//! structured-slugs file format consumes the specification.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use log::{debug, info};

use crate::errors::SpecResult;
use crate::models::{FormulaFamily, SectionTag};

/// A specification in the GR(1) fragment of LTL, written in the
/// structured-slugs format.
///
/// Proposition sets are deduplicated but insertion-ordered; formula
/// buffers keep load order. Buffer concatenation is order-sensitive,
/// proposition union is not.
#[derive(Debug, Clone, Default)]
pub struct Gr1Specification {
    name: String,
    env_props: IndexSet<String>,
    sys_props: IndexSet<String>,
    sys_init: Vec<String>,
    env_init: Vec<String>,
    sys_trans: Vec<String>,
    env_trans: Vec<String>,
    sys_liveness: Vec<String>,
    env_liveness: Vec<String>,
}

impl Gr1Specification {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Create a specification seeded with propositions.
    pub fn with_props(name: &str, env_props: Vec<String>, sys_props: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            env_props: env_props.into_iter().collect(),
            sys_props: sys_props.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn env_props(&self) -> &IndexSet<String> {
        &self.env_props
    }

    pub fn sys_props(&self) -> &IndexSet<String> {
        &self.sys_props
    }

    /// The formula buffer for one of the six sections.
    pub fn section(&self, tag: SectionTag) -> &[String] {
        match tag {
            SectionTag::SysInit => &self.sys_init,
            SectionTag::EnvInit => &self.env_init,
            SectionTag::SysTrans => &self.sys_trans,
            SectionTag::EnvTrans => &self.env_trans,
            SectionTag::SysLiveness => &self.sys_liveness,
            SectionTag::EnvLiveness => &self.env_liveness,
        }
    }

    fn section_mut(&mut self, tag: SectionTag) -> &mut Vec<String> {
        match tag {
            SectionTag::SysInit => &mut self.sys_init,
            SectionTag::EnvInit => &mut self.env_init,
            SectionTag::SysTrans => &mut self.sys_trans,
            SectionTag::EnvTrans => &mut self.env_trans,
            SectionTag::SysLiveness => &mut self.sys_liveness,
            SectionTag::EnvLiveness => &mut self.env_liveness,
        }
    }

    /// Load one formula family: merge its propositions and append its
    /// formulas to the buffer its section selects.
    pub fn load(&mut self, family: FormulaFamily) {
        debug!(
            "loading {} formulas into {} of specification {}",
            family.formulas.len(),
            family.section,
            self.name
        );

        self.env_props.extend(family.env_props);
        self.sys_props.extend(family.sys_props);
        self.section_mut(family.section).extend(family.formulas);
    }

    /// Load multiple formula families in order.
    pub fn load_families<I>(&mut self, families: I)
    where
        I: IntoIterator<Item = FormulaFamily>,
    {
        for family in families {
            self.load(family);
        }
    }

    /// Component-wise merger of other specifications into this one, in
    /// argument order: propositions are unioned, each of the six buffers
    /// is concatenated.
    pub fn merge<I>(&mut self, specifications: I)
    where
        I: IntoIterator<Item = Gr1Specification>,
    {
        for spec in specifications {
            debug!("merging specification {} into {}", spec.name, self.name);

            self.env_props.extend(spec.env_props);
            self.sys_props.extend(spec.sys_props);

            self.sys_init.extend(spec.sys_init);
            self.env_init.extend(spec.env_init);
            self.sys_trans.extend(spec.sys_trans);
            self.env_trans.extend(spec.env_trans);
            self.sys_liveness.extend(spec.sys_liveness);
            self.env_liveness.extend(spec.env_liveness);
        }
    }

    /// Render the eight sections of the structured-slugs format: the
    /// two proposition lists followed by the six formula sections, each
    /// a header line plus one item per line, blank-line separated.
    pub fn render(&self) -> String {
        let mut out = String::new();

        render_section(&mut out, "[INPUT]", self.env_props.iter());
        render_section(&mut out, "[OUTPUT]", self.sys_props.iter());

        for tag in SectionTag::ALL {
            render_section(&mut out, tag.header(), self.section(tag).iter());
        }

        out
    }

    /// Write the specification into `folder_path/<name>/
    /// <name>.structuredslugs`, creating the directory if absent, along
    /// with a metadata file. Consumes the specification; a written
    /// specification is final.
    pub fn write_structured_slugs(self, folder_path: &Path) -> SpecResult<(PathBuf, PathBuf)> {
        let folder_path = folder_path.join(&self.name);
        fs::create_dir_all(&folder_path)?;

        let filename = format!("{}.structuredslugs", self.name);
        let full_file_path = folder_path.join(&filename);
        fs::write(&full_file_path, self.render())?;

        self.write_metadata(&folder_path)?;

        info!(
            "created specification file {} in {}",
            filename,
            folder_path.display()
        );

        Ok((full_file_path, folder_path))
    }

    fn write_metadata(&self, folder_path: &Path) -> SpecResult<()> {
        let metadata = serde_json::json!({
            "name": self.name,
            "created_at": chrono::Utc::now().to_rfc3339(),
            "env_props": self.env_props.len(),
            "sys_props": self.sys_props.len(),
            "formulas": {
                "sys_init": self.sys_init.len(),
                "env_init": self.env_init.len(),
                "sys_trans": self.sys_trans.len(),
                "env_trans": self.env_trans.len(),
                "sys_liveness": self.sys_liveness.len(),
                "env_liveness": self.env_liveness.len(),
            },
        });

        let metadata_path = folder_path.join("metadata.json");
        fs::write(&metadata_path, serde_json::to_string_pretty(&metadata)?)?;

        Ok(())
    }
}

fn render_section<'a, I>(out: &mut String, header: &str, items: I)
where
    I: Iterator<Item = &'a String>,
{
    out.push_str(header);
    out.push('\n');
    for item in items {
        out.push_str(item);
        out.push('\n');
    }
    out.push('\n');
}
