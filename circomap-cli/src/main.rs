mod heatmap;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "circomap";
    pub const BIN_NAME: &str = "circomap";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Turn genomic feature annotations into windowed density tracks for Circos.")
        .subcommand_required(true)
        .subcommand(heatmap::cli::create_heatmap_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // HEATMAP
        //
        Some((heatmap::cli::HEATMAP_CMD, matches)) => {
            heatmap::handlers::run_heatmap(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
