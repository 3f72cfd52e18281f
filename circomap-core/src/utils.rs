use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::HeatmapError;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, HeatmapError> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Read a two-column scaffold length file into a name-to-length map.
/// Names are expected to be unique; a repeated name keeps the last length.
///
/// # Arguments
///
/// - path: path to the tab-delimited `name<TAB>length` file
///
pub fn read_scaffold_lengths<T: AsRef<Path>>(path: T) -> Result<HashMap<String, u32>, HeatmapError> {
    let reader = get_dynamic_reader(path.as_ref())?;

    let mut lengths: HashMap<String, u32> = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.trim_end().split('\t');
        let name = fields
            .next()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| HeatmapError::MalformedLengthLine(line.clone()))?;
        let length: u32 = fields
            .next()
            .and_then(|l| l.parse().ok())
            .ok_or_else(|| HeatmapError::MalformedLengthLine(line.clone()))?;

        lengths.insert(name.to_string(), length);
    }

    Ok(lengths)
}

///
/// Derive scaffold lengths from a FASTA file by summing the sequence line
/// lengths under each header. No format validation beyond that; whitespace
/// in headers will not work downstream in Circos anyway.
///
/// # Arguments
///
/// - path: path to the FASTA file, gzipped or plain
///
pub fn fasta_scaffold_lengths<T: AsRef<Path>>(
    path: T,
) -> Result<HashMap<String, u32>, HeatmapError> {
    let reader = get_dynamic_reader(path.as_ref())?;

    let mut lengths: HashMap<String, u32> = HashMap::new();
    let mut header: Option<String> = None;

    for line in reader.lines() {
        let line = line?;

        if let Some(name) = line.strip_prefix('>') {
            let name = name.trim().to_string();
            lengths.entry(name.clone()).or_insert(0);
            header = Some(name);
        } else if let Some(name) = &header {
            *lengths.get_mut(name).unwrap() += line.trim().len() as u32;
        }
        // sequence lines before the first header are ignored
    }

    Ok(lengths)
}

///
/// Read a scaffold restriction list: one name per line, blank lines
/// skipped, file order preserved.
///
pub fn read_scaffold_list<T: AsRef<Path>>(path: T) -> Result<Vec<String>, HeatmapError> {
    let reader = get_dynamic_reader(path.as_ref())?;

    let mut scaffolds: Vec<String> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            scaffolds.push(name.to_string());
        }
    }

    Ok(scaffolds)
}
