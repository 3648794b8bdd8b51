//! Binary that builds a graph, either at random or from a `.gr` input, computes vertex covers with
//! all three algorithms and writes the graph statistics and the covers to standard out.

use std::error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use cover_trio::{graph::Graph, vc_instance::CoverReport};

#[derive(Parser)]
#[command(name = "mvc")]
#[command(about = "Minimum vertex cover by 2-approximation, bounded search tree and kernelization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a random graph
    Random {
        /// Number of vertices
        #[arg(short = 'n', long)]
        size: usize,

        /// Probability of an edge between two vertices
        #[arg(short, long)]
        probability: f64,

        /// Seed for a reproducible graph
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Read a graph in `.gr` format
    Gr {
        /// Input file, standard in if omitted
        path: Option<PathBuf>,
    },
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let graph = match cli.command {
        Commands::Random { size, probability, seed } => match seed {
            Some(seed) => Graph::random_seeded(size, probability, seed)?,
            None => Graph::random(size, probability, &mut rand::thread_rng())?,
        },
        Commands::Gr { path: Some(path) } => Graph::read_gr(BufReader::new(File::open(path)?))?,
        Commands::Gr { path: None } => Graph::read_gr(io::stdin().lock())?,
    };
    info!("graph with n={}, m={}", graph.num_vertices(), graph.num_edges());

    let report = CoverReport::compute(&graph);
    report.validate(&graph)?;

    let stdout = io::stdout();
    report.write(stdout.lock())?;
    Ok(())
}
