use std::collections::HashMap;
use std::io::Write;

use crate::errors::HeatmapError;
use crate::models::{Interval, ScaffoldFeatureSet};

///
/// Window struct, one coordinate bin on a scaffold. 0-based, `end` is the
/// last base inside the bin.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: u32,
    pub end: u32,
}

impl Window {
    pub fn width(&self) -> u32 {
        self.end - self.start + 1
    }
}

///
/// Tile `[0, scaffold_len)` with windows of `window_len` bases plus one
/// trailing window covering the remainder. When `scaffold_len` is an exact
/// multiple of `window_len` every window is full-size and no extra window
/// is appended.
///
pub fn generate_windows(scaffold_len: u32, window_len: u32) -> Result<Vec<Window>, HeatmapError> {
    if window_len == 0 {
        return Err(HeatmapError::InvalidWindowLength);
    }

    let full = scaffold_len / window_len;
    let mut windows: Vec<Window> = Vec::with_capacity(full as usize + 1);

    for k in 0..full {
        windows.push(Window {
            start: k * window_len,
            end: (k + 1) * window_len - 1,
        });
    }

    let remainder_start = full * window_len;
    if remainder_start < scaffold_len {
        windows.push(Window {
            start: remainder_start,
            end: scaffold_len - 1,
        });
    }

    Ok(windows)
}

///
/// Count covered bases per window for one scaffold's merged intervals.
///
/// The contribution arithmetic follows the reference tool exactly: an
/// interval inside one window contributes `end - start`, an interval
/// spanning windows contributes `window.end - start` to its first window,
/// `end - window.start` to its last, and the full `window_len` to every
/// interior window.
///
/// After every update the accumulated count must stay within `window_len`;
/// exceeding it means an overlap escaped the merge pass and is reported as
/// [`HeatmapError::CoverageOverflow`].
///
pub fn window_coverage(
    scaffold: &str,
    merged: &[Interval],
    windows: &[Window],
    window_len: u32,
    scaffold_len: u32,
) -> Result<Vec<u32>, HeatmapError> {
    let mut covered: Vec<u32> = vec![0; windows.len()];

    let bump = |covered: &mut Vec<u32>, window: usize, bases: u32| -> Result<(), HeatmapError> {
        covered[window] += bases;
        if covered[window] > window_len {
            return Err(HeatmapError::CoverageOverflow {
                scaffold: scaffold.to_string(),
                window,
                covered: covered[window],
                window_len,
            });
        }
        Ok(())
    };

    for interval in merged {
        if interval.end >= scaffold_len {
            return Err(HeatmapError::FeatureBeyondScaffold {
                scaffold: scaffold.to_string(),
                end: interval.end,
                length: scaffold_len,
            });
        }

        let start_window = (interval.start / window_len) as usize;
        let end_window = (interval.end / window_len) as usize;

        if start_window == end_window {
            bump(&mut covered, start_window, interval.end - interval.start)?;
        } else {
            bump(
                &mut covered,
                start_window,
                windows[start_window].end - interval.start,
            )?;
            bump(
                &mut covered,
                end_window,
                interval.end - windows[end_window].start,
            )?;
            for window in start_window + 1..end_window {
                bump(&mut covered, window, window_len)?;
            }
        }
    }

    Ok(covered)
}

///
/// Write one scaffold's density rows: `scaffold<TAB>start<TAB>end<TAB>density`.
///
/// The denominator is always the nominal `window_len`, also for a shorter
/// trailing window; the reference tool divides this way and its output is
/// reproduced verbatim.
///
fn write_scaffold_rows(
    out: &mut dyn Write,
    scaffold: &str,
    windows: &[Window],
    covered: &[u32],
    window_len: u32,
) -> Result<(), HeatmapError> {
    for (window, bases) in windows.iter().zip(covered.iter()) {
        let density = *bases as f64 / window_len as f64;
        writeln!(
            out,
            "{}\t{}\t{}\t{:.10}",
            scaffold, window.start, window.end, density
        )?;
    }
    Ok(())
}

///
/// Run the full pipeline and write one density row per window.
///
/// Output is restricted to and ordered by `scaffold_list` when given;
/// otherwise it covers every scaffold bearing at least one feature, in
/// lexicographic order. Scaffolds without features go through the same
/// window-generation and row-writing path and yield all-zero densities.
///
/// # Arguments
/// - features: loaded feature set
/// - lengths: scaffold name to total base length
/// - window_len: nominal window length in bases
/// - scaffold_list: optional restriction list, also fixes output order
/// - out: destination for the tab-delimited rows
pub fn heatmap_tracks(
    features: &ScaffoldFeatureSet,
    lengths: &HashMap<String, u32>,
    window_len: u32,
    scaffold_list: Option<&[String]>,
    out: &mut dyn Write,
) -> Result<(), HeatmapError> {
    let merged = features.merged();

    let scaffolds: Vec<String> = match scaffold_list {
        Some(list) => list.to_vec(),
        None => features.scaffolds(),
    };

    for scaffold in &scaffolds {
        let scaffold_len = *lengths
            .get(scaffold)
            .ok_or_else(|| HeatmapError::MissingLength(scaffold.clone()))?;

        let windows = generate_windows(scaffold_len, window_len)?;
        let intervals = merged.get(scaffold).map(|v| v.as_slice()).unwrap_or(&[]);
        let covered = window_coverage(scaffold, intervals, &windows, window_len, scaffold_len)?;

        write_scaffold_rows(out, scaffold, &windows, &covered, window_len)?;
    }

    Ok(())
}
