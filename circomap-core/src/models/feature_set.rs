use std::collections::HashMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::errors::HeatmapError;
use crate::models::{Interval, MergeOutcome};
use crate::utils::get_dynamic_reader;

///
/// ScaffoldFeatureSet struct, the per-scaffold feature intervals loaded
/// from a GFF-like file. Intervals are stored 0-based with inclusive ends,
/// in file order; they are only sorted when a merged set is requested.
///
#[derive(Clone, Debug, Default)]
pub struct ScaffoldFeatureSet {
    pub features: HashMap<String, Vec<Interval>>,
}

impl TryFrom<&Path> for ScaffoldFeatureSet {
    type Error = HeatmapError;

    ///
    /// Create a new [ScaffoldFeatureSet] from a GFF-like file.
    ///
    /// Only fields 1 (scaffold), 4 (1-based start) and 5 (1-based end) are
    /// used; everything else is ignored. Lines starting with `#` are
    /// skipped. Any malformed record aborts the load.
    ///
    /// # Arguments:
    /// - value: path to the file on disk, gzipped or plain.
    fn try_from(value: &Path) -> Result<Self, HeatmapError> {
        let reader = get_dynamic_reader(value)?;

        let mut features: HashMap<String, Vec<Interval>> = HashMap::new();

        for line in reader.lines() {
            let line = line?;

            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }

            let (scaffold, interval) = parse_feature_line(&line)?;
            features.entry(scaffold).or_default().push(interval);
        }

        Ok(ScaffoldFeatureSet { features })
    }
}

impl TryFrom<&str> for ScaffoldFeatureSet {
    type Error = HeatmapError;

    fn try_from(value: &str) -> Result<Self, HeatmapError> {
        ScaffoldFeatureSet::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for ScaffoldFeatureSet {
    type Error = HeatmapError;

    fn try_from(value: PathBuf) -> Result<Self, HeatmapError> {
        ScaffoldFeatureSet::try_from(value.as_path())
    }
}

impl From<HashMap<String, Vec<Interval>>> for ScaffoldFeatureSet {
    fn from(features: HashMap<String, Vec<Interval>>) -> Self {
        ScaffoldFeatureSet { features }
    }
}

impl ScaffoldFeatureSet {
    ///
    /// Append one interval to a scaffold's list.
    ///
    pub fn insert(&mut self, scaffold: &str, interval: Interval) {
        self.features
            .entry(scaffold.to_string())
            .or_default()
            .push(interval);
    }

    ///
    /// Scaffold names bearing at least one feature, sorted lexicographically.
    ///
    pub fn scaffolds(&self) -> Vec<String> {
        let mut names: Vec<String> = self.features.keys().cloned().collect();
        names.sort();
        names
    }

    ///
    /// Get number of loaded intervals across all scaffolds.
    ///
    pub fn len(&self) -> usize {
        self.features.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    ///
    /// Collapse every scaffold's intervals into the minimal start-sorted
    /// covering set.
    ///
    pub fn merged(&self) -> HashMap<String, Vec<Interval>> {
        self.features
            .iter()
            .map(|(scaffold, intervals)| (scaffold.clone(), merge_intervals(intervals.clone())))
            .collect()
    }
}

///
/// Parse one tab-delimited feature record into `(scaffold, Interval)`,
/// converting 1-based inclusive coordinates to the 0-based internal form.
///
fn parse_feature_line(line: &str) -> Result<(String, Interval), HeatmapError> {
    let parts: Vec<&str> = line.split('\t').collect();

    if parts.len() < 5 {
        return Err(HeatmapError::MalformedFeatureLine(line.to_string()));
    }

    let start: u32 = parts[3]
        .parse()
        .map_err(|_| HeatmapError::BadCoordinate(line.to_string()))?;
    let end: u32 = parts[4]
        .parse()
        .map_err(|_| HeatmapError::BadCoordinate(line.to_string()))?;

    if start == 0 || end == 0 {
        return Err(HeatmapError::ZeroCoordinate(line.to_string()));
    }
    if start > end {
        return Err(HeatmapError::ReversedInterval(line.to_string()));
    }

    Ok((parts[0].to_string(), Interval::new(start - 1, end - 1)))
}

///
/// Sort intervals by start and collapse overlapping ones into a minimal
/// covering set with a single linear scan.
///
/// Pairs sharing only a boundary base stay separate, see
/// [`Interval::classify`].
///
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.is_empty() {
        return intervals;
    }

    // stable sort; equal starts keep file order, the classification is
    // symmetric for them anyway
    intervals.sort_by_key(|iv| iv.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    let mut current = intervals[0];

    for next in intervals.into_iter().skip(1) {
        match current.classify(&next) {
            MergeOutcome::Disjoint => {
                merged.push(current);
                current = next;
            }
            MergeOutcome::Extended(combined) => {
                current = combined;
            }
            MergeOutcome::Contained => {}
        }
    }
    merged.push(current);

    merged
}
