/// Filter criteria value objects
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inclusive year bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// Earliest year included
    pub min: i32,

    /// Latest year included
    pub max: i32,
}

impl YearRange {
    /// Create an inclusive range
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Whether the year falls inside the range
    pub fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

/// Attribute filters applied over a catalog's tracks
///
/// Empty region/collection sets and an absent year range mean "no
/// constraint" for that attribute. All active constraints must hold for a
/// track to pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Regions to include (exact match against the normalized region)
    pub regions: BTreeSet<String>,

    /// Collection display names to include
    pub collections: BTreeSet<String>,

    /// Inclusive year bounds; tracks with unparseable years always pass
    pub years: Option<YearRange>,
}

impl FilterCriteria {
    /// Criteria with no constraints (passes every track)
    pub fn none() -> Self {
        Self::default()
    }

    /// Add a region constraint
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.regions.insert(region.into());
        self
    }

    /// Add a collection-name constraint
    pub fn with_collection(mut self, name: impl Into<String>) -> Self {
        self.collections.insert(name.into());
        self
    }

    /// Set the year bounds
    pub fn with_years(mut self, years: YearRange) -> Self {
        self.years = Some(years);
        self
    }

    /// Whether no constraint is active
    pub fn is_unconstrained(&self) -> bool {
        self.regions.is_empty() && self.collections.is_empty() && self.years.is_none()
    }
}
