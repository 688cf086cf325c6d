//! Dashboard view - everything the screen shows for one filter state
//!
//! `DashboardView::build` is a pure function of a filtered view. The App
//! rebuilds it from scratch after every filter change.

use super::filter::FilteredView;
use super::sample::Sample;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const NO_VARIANT_DATA: &str = "No data available for the selected filters.";
pub const NO_TIMELINE_DATA: &str = "No data to display in timeline.";
pub const NO_BOX_PLOT_DATA: &str = "No data to display in box plot.";

/// Chart payload, or the warning shown in its place
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData<T> {
    Ready(T),
    Empty(&'static str),
}

impl<T> ChartData<T> {
    #[cfg(test)]
    pub fn ready(&self) -> Option<&T> {
        match self {
            ChartData::Ready(data) => Some(data),
            ChartData::Empty(_) => None,
        }
    }
}

/// Bar of the variant frequency chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantCount {
    pub variant: String,
    pub count: usize,
}

/// Point of the collection timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub variant: String,
    pub region: String,
    pub sample_id: String,
}

/// Five-number summary plus outliers for one variant
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub variant: String,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// Summarize values; `None` for an empty slice
    pub fn from_values(variant: &str, values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let fence = 1.5 * (q3 - q1);
        let (low_fence, high_fence) = (q1 - fence, q3 + fence);

        let (inside, outliers): (Vec<f64>, Vec<f64>) = sorted
            .iter()
            .partition(|v| **v >= low_fence && **v <= high_fence);
        let lower_whisker = inside.first().copied().unwrap_or(q1);
        let upper_whisker = inside.last().copied().unwrap_or(q3);

        Some(Self {
            variant: variant.to_string(),
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[sorted.len() - 1],
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Linear interpolation between closest ranks; `sorted` must be non-empty
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

/// Renderer output
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub row_count: usize,
    pub samples: Vec<Sample>,
    pub variant_counts: ChartData<Vec<VariantCount>>,
    pub timeline: ChartData<Vec<TimelinePoint>>,
    pub genome_lengths: ChartData<Vec<BoxSummary>>,
}

impl DashboardView {
    /// Derive the row count and every chart from one filtered view.
    ///
    /// An empty view yields `ChartData::Empty` with each chart's warning.
    pub fn build(view: &FilteredView) -> Self {
        if view.is_empty() {
            return Self {
                row_count: 0,
                samples: Vec::new(),
                variant_counts: ChartData::Empty(NO_VARIANT_DATA),
                timeline: ChartData::Empty(NO_TIMELINE_DATA),
                genome_lengths: ChartData::Empty(NO_BOX_PLOT_DATA),
            };
        }

        let samples: Vec<Sample> = view.samples().iter().map(|s| (*s).clone()).collect();
        Self {
            row_count: samples.len(),
            variant_counts: ChartData::Ready(variant_counts(&samples)),
            timeline: ChartData::Ready(timeline(&samples)),
            genome_lengths: ChartData::Ready(genome_lengths(&samples)),
            samples,
        }
    }
}

/// Count per variant, most frequent first; ties keep first-appearance order
fn variant_counts(samples: &[Sample]) -> Vec<VariantCount> {
    let mut counts: Vec<VariantCount> = Vec::new();
    for sample in samples {
        match counts.iter_mut().find(|c| c.variant == sample.variant) {
            Some(entry) => entry.count += 1,
            None => counts.push(VariantCount {
                variant: sample.variant.clone(),
                count: 1,
            }),
        }
    }
    // stable sort keeps appearance order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

fn timeline(samples: &[Sample]) -> Vec<TimelinePoint> {
    samples
        .iter()
        .map(|s| TimelinePoint {
            date: s.collection_date,
            variant: s.variant.clone(),
            region: s.region.clone(),
            sample_id: s.sample_id.clone(),
        })
        .collect()
}

fn genome_lengths(samples: &[Sample]) -> Vec<BoxSummary> {
    let mut by_variant: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for sample in samples {
        by_variant
            .entry(sample.variant.as_str())
            .or_default()
            .push(f64::from(sample.genome_length));
    }
    by_variant
        .into_iter()
        .filter_map(|(variant, values)| BoxSummary::from_values(variant, &values))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::FilterCriteria;
    use crate::model::sample::tests::date;
    use crate::model::sample::SampleTable;

    fn build_with(edit: impl FnOnce(&mut FilterCriteria)) -> DashboardView {
        let table = SampleTable::builtin().unwrap();
        let mut criteria = FilterCriteria::select_all(&table);
        edit(&mut criteria);
        DashboardView::build(&criteria.apply(&table))
    }

    #[test]
    fn test_full_dataset_counts() {
        let view = build_with(|_| {});
        assert_eq!(view.row_count, 8);

        let counts = view.variant_counts.ready().unwrap();
        // Gamma and Delta tie at 3; Gamma appears first in the table
        assert_eq!(
            counts,
            &vec![
                VariantCount { variant: "Gamma".into(), count: 3 },
                VariantCount { variant: "Delta".into(), count: 3 },
                VariantCount { variant: "Omicron".into(), count: 2 },
            ]
        );
    }

    #[test]
    fn test_single_variant_has_one_bar() {
        let view = build_with(|c| c.variants = ["Omicron".to_string()].into_iter().collect());
        let counts = view.variant_counts.ready().unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].variant, "Omicron");
        assert_eq!(counts[0].count, 2);
        assert_eq!(view.row_count, 2);
    }

    #[test]
    fn test_empty_result_marks_every_chart() {
        let view = build_with(|c| {
            c.start = date("2020-01-01");
            c.end = date("2020-12-31");
        });
        assert_eq!(view.row_count, 0);
        assert!(view.samples.is_empty());
        assert_eq!(view.variant_counts, ChartData::Empty(NO_VARIANT_DATA));
        assert_eq!(view.timeline, ChartData::Empty(NO_TIMELINE_DATA));
        assert_eq!(view.genome_lengths, ChartData::Empty(NO_BOX_PLOT_DATA));
    }

    #[test]
    fn test_timeline_point_per_sample() {
        let view = build_with(|c| c.regions = ["Mexico".to_string()].into_iter().collect());
        let points = view.timeline.ready().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].sample_id, "MX001");
        assert_eq!(points[0].date, date("2021-02-20"));
        assert_eq!(points[0].variant, "Delta");
        assert_eq!(points[1].region, "Mexico");
    }

    #[test]
    fn test_genome_length_summaries_sorted_by_variant() {
        let view = build_with(|_| {});
        let boxes = view.genome_lengths.ready().unwrap();
        let names: Vec<_> = boxes.iter().map(|b| b.variant.as_str()).collect();
        assert_eq!(names, vec!["Delta", "Gamma", "Omicron"]);

        let delta = &boxes[0];
        assert_eq!(delta.min, 29850.0);
        assert_eq!(delta.q1, 29875.0);
        assert_eq!(delta.median, 29900.0);
        assert_eq!(delta.q3, 29905.0);
        assert_eq!(delta.max, 29910.0);
        assert!(delta.outliers.is_empty());

        let gamma = &boxes[1];
        assert_eq!(gamma.iqr(), 0.0);
        assert_eq!(gamma.lower_whisker, 29903.0);
        assert_eq!(gamma.upper_whisker, 29903.0);

        let omicron = &boxes[2];
        assert_eq!(omicron.median, 29867.5);
        assert_eq!(omicron.q1, 29866.25);
    }

    #[test]
    fn test_box_summary_outliers() {
        let summary = BoxSummary::from_values("X", &[4.0, 1.0, 100.0, 3.0, 2.0]).unwrap();
        assert_eq!(summary.q1, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q3, 4.0);
        assert_eq!(summary.upper_whisker, 4.0);
        assert_eq!(summary.lower_whisker, 1.0);
        assert_eq!(summary.outliers, vec![100.0]);
        assert_eq!(summary.max, 100.0);
    }

    #[test]
    fn test_box_summary_low_outlier() {
        let summary = BoxSummary::from_values("X", &[1.0, 50.0, 51.0, 52.0, 53.0]).unwrap();
        assert_eq!(summary.q1, 50.0);
        assert_eq!(summary.q3, 52.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.lower_whisker, 50.0);
        assert_eq!(summary.upper_whisker, 53.0);
        assert_eq!(summary.outliers, vec![1.0]);
    }

    #[test]
    fn test_box_summary_single_value() {
        let summary = BoxSummary::from_values("X", &[7.0]).unwrap();
        assert_eq!(summary.min, 7.0);
        assert_eq!(summary.median, 7.0);
        assert_eq!(summary.max, 7.0);
        assert!(BoxSummary::from_values("X", &[]).is_none());
    }
}
