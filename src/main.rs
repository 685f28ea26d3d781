//! Command-line entry point: read an instance and its starting tours, then
//! run plain and guided local search over every starting tour.

use clap::Parser;
use gls_tsp::config::SearchConfig;
use gls_tsp::instance::Instance;
use gls_tsp::solution::Algorithm;
use gls_tsp::tour::Tour;
use gls_tsp::TspSolver;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// TSPLIB-style instance file
    instance: PathBuf,
    /// Starting tours, one group of DIMENSION values per tour
    tours: PathBuf,
    /// Also write the collected results as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let instance = Instance::from_file(&args.instance)?;
    let initial = Tour::read_file(&args.tours, instance.size())?;

    println!("Name: {}", instance.name());
    println!("Description: {}", instance.comment());
    println!("Size: {}", instance.size());

    let solver = TspSolver::new(instance, SearchConfig::default());
    let mut results = Vec::new();

    for algorithm in [Algorithm::LocalSearch, Algorithm::GuidedLocalSearch] {
        println!(">>>>>>>>>>ALGO: {}<<<<<<<<<<", algorithm);

        for start in &initial {
            println!("Initial length: {}", start.length(&solver.instance));
            println!("Initial: {}", start);

            let result = solver.solve_one(algorithm, start);

            println!("Iterations: {}", result.iterations);
            println!("Elapsed time: {} ms", result.elapsed.as_millis());
            println!("Record length: {}", result.length);
            println!("Path: {}", result.tour);
            println!();

            results.push(result);
        }
    }

    if let Some(path) = args.json {
        serde_json::to_writer_pretty(File::create(path)?, &results)?;
    }

    Ok(())
}
