//! A transition system over workspace regions (e.g. a robot's control
//! modes or a map of adjacent rooms), treated as an adjacency relation.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::errors::{SpecError, SpecResult};

/// An ordered mapping from region name to the regions reachable from it
/// in one step. Self-loops are permitted. Iteration follows insertion
/// order; formula output depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IndexMap<String, Vec<String>>")]
pub struct TransitionSystem {
    regions: IndexMap<String, Vec<String>>,
}

impl TransitionSystem {
    /// Validate and wrap an adjacency map. Every adjacency target must
    /// itself be a region (closed adjacency).
    pub fn new(regions: IndexMap<String, Vec<String>>) -> SpecResult<Self> {
        for (region, adjacent) in &regions {
            for target in adjacent {
                if !regions.contains_key(target) {
                    return Err(SpecError::MalformedTransitionSystem(format!(
                        "adjacency target {} of region {} is not a region",
                        target, region
                    )));
                }
            }
        }
        Ok(Self { regions })
    }

    /// A transition system with no regions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from name/adjacency pairs, preserving the given order.
    pub fn from_pairs<'a, I>(pairs: I) -> SpecResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let regions = pairs
            .into_iter()
            .map(|(region, adjacent)| {
                (
                    region.to_string(),
                    adjacent.iter().map(|a| a.to_string()).collect(),
                )
            })
            .collect();
        Self::new(regions)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn contains(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    /// Region names in insertion order.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// The regions adjacent to the given one, in insertion order.
    pub fn adjacent(&self, region: &str) -> &[String] {
        self.regions.get(region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.regions
            .iter()
            .map(|(region, adjacent)| (region.as_str(), adjacent.as_slice()))
    }

    /// Restrict the system to the given regions of interest, filtering
    /// each adjacency list so it stays within the subset. An empty
    /// subset means no restriction. A region of interest that is not in
    /// the system is an error.
    pub fn restrict(&self, regions_of_interest: &[String]) -> SpecResult<Self> {
        if regions_of_interest.is_empty() {
            return Ok(self.clone());
        }

        let mut restricted = IndexMap::new();
        for region in regions_of_interest {
            let adjacent = self.regions.get(region).ok_or_else(|| {
                SpecError::MalformedTransitionSystem(format!(
                    "region of interest {} is not in the transition system",
                    region
                ))
            })?;
            let kept: Vec<String> = adjacent
                .iter()
                .filter(|target| regions_of_interest.contains(target))
                .cloned()
                .collect();
            restricted.insert(region.clone(), kept);
        }
        Self::new(restricted)
    }
}

impl TryFrom<IndexMap<String, Vec<String>>> for TransitionSystem {
    type Error = SpecError;

    fn try_from(regions: IndexMap<String, Vec<String>>) -> SpecResult<Self> {
        Self::new(regions)
    }
}
