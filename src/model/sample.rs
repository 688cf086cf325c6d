//! Sample table - the built-in dataset
//!
//! The table is decoded once from embedded CSV text and never mutated.
//! Everything downstream borrows from it.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::info;

/// Fictitious samples shipped with the dashboard
const BUILTIN_SAMPLES: &str = "\
sample_id,collection_date,region,variant,genome_length
BR001,2021-01-15,Brazil,Gamma,29903
BR002,2021-02-10,Brazil,Gamma,29903
BR003,2021-03-05,Brazil,Delta,29850
MX001,2021-02-20,Mexico,Delta,29900
MX002,2021-03-12,Mexico,Omicron,29870
US001,2021-01-25,USA,Delta,29910
US002,2021-02-15,USA,Omicron,29865
US003,2021-03-02,USA,Gamma,29903
";

/// One row of genomic metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub sample_id: String,
    pub collection_date: NaiveDate,
    pub region: String,
    pub variant: String,
    /// Base pairs
    pub genome_length: u32,
}

impl Sample {
    /// Cells in table column order, for the raw data view
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.sample_id.clone(),
            self.collection_date.format("%Y-%m-%d").to_string(),
            self.region.clone(),
            self.variant.clone(),
            self.genome_length.to_string(),
        ]
    }

    /// Headers of the raw data view, matching `cells`
    pub fn column_names() -> Vec<String> {
        ["Sample_ID", "Date", "Region", "Variant", "Genome_Length"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

/// Immutable set of samples
#[derive(Debug, Clone)]
pub struct SampleTable {
    samples: Vec<Sample>,
}

impl SampleTable {
    /// The dataset compiled into the binary
    pub fn builtin() -> Result<Self> {
        let table = Self::from_csv(BUILTIN_SAMPLES).context("Built-in sample table is invalid")?;
        info!(rows = table.len(), "loaded built-in sample table");
        Ok(table)
    }

    /// Decode samples from CSV text with a header row
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let mut samples = Vec::new();
        for (line, record) in reader.deserialize::<Sample>().enumerate() {
            let sample = record.with_context(|| format!("Failed to decode sample row {}", line + 1))?;
            samples.push(sample);
        }

        Self::new(samples)
    }

    /// Build a table, checking the per-sample invariants
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        let mut seen = HashSet::new();
        for sample in &samples {
            if sample.sample_id.is_empty() {
                bail!("Sample with empty id (collected {})", sample.collection_date);
            }
            if !seen.insert(sample.sample_id.as_str()) {
                bail!("Duplicate sample id '{}'", sample.sample_id);
            }
            if sample.genome_length == 0 {
                bail!("Sample '{}' has a zero genome length", sample.sample_id);
            }
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Earliest and latest collection dates
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.samples.iter().map(|s| s.collection_date).min()?;
        let max = self.samples.iter().map(|s| s.collection_date).max()?;
        Some((min, max))
    }

    /// Sorted unique regions
    pub fn regions(&self) -> Vec<String> {
        Self::unique_sorted(self.samples.iter().map(|s| s.region.as_str()))
    }

    /// Sorted unique variants
    pub fn variants(&self) -> Vec<String> {
        Self::unique_sorted(self.samples.iter().map(|s| s.variant.as_str()))
    }

    fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        values
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    pub(crate) fn sample(id: &str, day: &str, region: &str, variant: &str, length: u32) -> Sample {
        Sample {
            sample_id: id.to_string(),
            collection_date: date(day),
            region: region.to_string(),
            variant: variant.to_string(),
            genome_length: length,
        }
    }

    #[test]
    fn test_builtin_table_has_eight_rows() {
        let table = SampleTable::builtin().unwrap();
        assert_eq!(table.len(), 8);
        assert_eq!(table.samples()[0], sample("BR001", "2021-01-15", "Brazil", "Gamma", 29903));
        assert_eq!(table.samples()[7], sample("US003", "2021-03-02", "USA", "Gamma", 29903));
    }

    #[test]
    fn test_builtin_table_facts() {
        let table = SampleTable::builtin().unwrap();
        assert_eq!(
            table.date_bounds(),
            Some((date("2021-01-15"), date("2021-03-12")))
        );
        assert_eq!(table.regions(), vec!["Brazil", "Mexico", "USA"]);
        assert_eq!(table.variants(), vec!["Delta", "Gamma", "Omicron"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = SampleTable::new(vec![
            sample("A1", "2021-01-01", "Brazil", "Gamma", 10),
            sample("A1", "2021-01-02", "USA", "Delta", 10),
        ]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Duplicate sample id 'A1'"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = SampleTable::new(vec![sample("", "2021-01-01", "Brazil", "Gamma", 10)]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("empty id"));

        let text = "sample_id,collection_date,region,variant,genome_length\n\
                     ,2021-01-01,Brazil,Gamma,100\n";
        let err = SampleTable::from_csv(text).unwrap_err();
        assert!(format!("{:#}", err).contains("empty id"));
    }

    #[test]
    fn test_zero_genome_length_rejected() {
        let result = SampleTable::new(vec![sample("A1", "2021-01-01", "Brazil", "Gamma", 0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_date_rejected() {
        let text = "sample_id,collection_date,region,variant,genome_length\n\
                    A1,2021-02-30,Brazil,Gamma,100\n";
        assert!(SampleTable::from_csv(text).is_err());
    }

    #[test]
    fn test_empty_table_has_no_bounds() {
        let table = SampleTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.date_bounds(), None);
        assert!(table.regions().is_empty());
    }

    #[test]
    fn test_cells_match_columns() {
        let s = sample("BR001", "2021-01-15", "Brazil", "Gamma", 29903);
        assert_eq!(s.cells(), vec!["BR001", "2021-01-15", "Brazil", "Gamma", "29903"]);
        assert_eq!(Sample::column_names().len(), s.cells().len());
    }
}
