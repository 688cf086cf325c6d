//! Filter engine - conjunction of the date, region and variant predicates

use super::sample::{Sample, SampleTable};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;

/// The three filter dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Inclusive lower bound
    pub start: NaiveDate,
    /// Inclusive upper bound
    pub end: NaiveDate,
    pub regions: BTreeSet<String>,
    pub variants: BTreeSet<String>,
}

impl FilterCriteria {
    /// Full date range with every region and variant selected
    pub fn select_all(table: &SampleTable) -> Self {
        let (start, end) = table
            .date_bounds()
            .unwrap_or((NaiveDate::MIN, NaiveDate::MAX));
        Self {
            start,
            end,
            regions: table.regions().into_iter().collect(),
            variants: table.variants().into_iter().collect(),
        }
    }

    /// True when the start date lies after the end date
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Inclusive date range AND selected region AND selected variant
    pub fn matches(&self, sample: &Sample) -> bool {
        self.start <= sample.collection_date
            && sample.collection_date <= self.end
            && self.regions.contains(&sample.region)
            && self.variants.contains(&sample.variant)
    }

    /// Samples matching every predicate, in table order
    pub fn apply<'a>(&self, table: &'a SampleTable) -> FilteredView<'a> {
        FilteredView {
            samples: table.samples().iter().filter(|s| self.matches(s)).collect(),
        }
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..={} regions=[{}] variants=[{}]",
            self.start,
            self.end,
            self.regions.iter().cloned().collect::<Vec<_>>().join(","),
            self.variants.iter().cloned().collect::<Vec<_>>().join(",")
        )
    }
}

/// Read-only subset of a table, in table order
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    samples: Vec<&'a Sample>,
}

impl<'a> FilteredView<'a> {
    pub fn samples(&self) -> &[&'a Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample ids, for logs and assertions
    pub fn ids(&self) -> Vec<&'a str> {
        self.samples.iter().map(|s| s.sample_id.as_str()).collect()
    }
}
