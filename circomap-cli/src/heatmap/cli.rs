use clap::{Arg, ArgGroup, Command, arg};

pub const HEATMAP_CMD: &str = "heatmap";

pub fn create_heatmap_cli() -> Command {
    Command::new(HEATMAP_CMD)
        .about("Compute per-window feature density over scaffolds for a Circos heatmap track.")
        .arg(arg!(--gff <GFF> "Input GFF3 file; only fields 1, 4 and 5 are used").required(true))
        .arg(
            Arg::new("scaf-lens")
                .long("scaf-lens")
                .help("Two-column file with scaffold names and lengths"),
        )
        .arg(
            Arg::new("fasta")
                .long("fasta")
                .help("FASTA file to derive scaffold lengths from, alternative to --scaf-lens"),
        )
        .group(
            ArgGroup::new("lengths")
                .args(["scaf-lens", "fasta"])
                .required(true),
        )
        .arg(
            arg!(--window <BASES> "Window length in bases")
                .required(true)
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("scaf-list")
                .long("scaf-list")
                .help("Restrict output to the scaffolds named in this file, in file order"),
        )
        .arg(arg!(--output <OUTPUT> "Output file (default: stdout)").required(false))
}
