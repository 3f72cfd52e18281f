use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::ArgMatches;

use circomap_core::density::heatmap_tracks;
use circomap_core::models::ScaffoldFeatureSet;
use circomap_core::utils::{fasta_scaffold_lengths, read_scaffold_lengths, read_scaffold_list};

pub fn run_heatmap(matches: &ArgMatches) -> Result<()> {
    let gff = matches.get_one::<String>("gff").expect("--gff is required");
    let window_len = *matches
        .get_one::<u32>("window")
        .expect("--window is required");

    let features = ScaffoldFeatureSet::try_from(gff.as_str())
        .with_context(|| format!("Failed to load features from {}", gff))?;

    let lengths = match matches.get_one::<String>("scaf-lens") {
        Some(path) => read_scaffold_lengths(path)
            .with_context(|| format!("Failed to read scaffold lengths from {}", path))?,
        None => {
            let path = matches
                .get_one::<String>("fasta")
                .expect("either --scaf-lens or --fasta is required");
            fasta_scaffold_lengths(path)
                .with_context(|| format!("Failed to derive scaffold lengths from {}", path))?
        }
    };

    let scaffold_list = match matches.get_one::<String>("scaf-list") {
        Some(path) => Some(
            read_scaffold_list(path)
                .with_context(|| format!("Failed to read scaffold list from {}", path))?,
        ),
        None => None,
    };

    match matches.get_one::<String>("output") {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path))?;
            let mut out = BufWriter::new(file);
            heatmap_tracks(
                &features,
                &lengths,
                window_len,
                scaffold_list.as_deref(),
                &mut out,
            )?;
            eprintln!("Output written to {}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            heatmap_tracks(
                &features,
                &lengths,
                window_len,
                scaffold_list.as_deref(),
                &mut out,
            )?;
        }
    }

    Ok(())
}
