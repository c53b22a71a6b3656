use std::path::PathBuf;

use anyhow::Context;
use archipelago::{
    islands::{build_network, random_populations, read_islands},
    report::{attachment_rows, render_attachments},
    search::cheapest_attachment::CheapestAttachmentEngine,
    utility::init_tracing,
};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

/// Connects islands starting from one island, always over the cheapest
/// route to an island not yet connected.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one island name per line
    #[arg(long, default_value = "islands.txt")]
    islands: PathBuf,

    /// File with one latitude per line, same order as the names
    #[arg(long, default_value = "lats.txt")]
    lats: PathBuf,

    /// File with one longitude per line, same order as the names
    #[arg(long, default_value = "longs.txt")]
    longs: PathBuf,

    /// Island to start from
    #[arg(short, long, default_value = "Big Island")]
    source: String,

    /// Number of leading islands that are connected with each other
    #[arg(short, long, default_value_t = 8)]
    region: usize,

    /// Seed for the random populations
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as json
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let islands = read_islands(&args.islands, &args.lats, &args.longs)
        .context("reading island files")?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let populations = random_populations(islands.len(), &mut rng);
    let graph = build_network(&islands, &populations, args.region)?;

    info!(source = %args.source, "attaching islands");
    let tree = CheapestAttachmentEngine::new().run(&graph, &args.source)?;
    let rows = attachment_rows(&graph, &tree);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_attachments(&rows, tree.total_weight()));
    }

    Ok(())
}
