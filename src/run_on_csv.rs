use anyhow::{anyhow, Context, Result};
use clap::Parser;
use csv::ReaderBuilder;
use seams::{AdjacencyListGraph, SspAlgorithm};
use tracing::{debug, info, Level};

#[derive(Parser, Debug)]
#[command(name = "csv")]
#[command(about = "Build a graph from a CSV with node_id, neighbor_id, and weight per row and print a shortest path between two node ids.", long_about = None)]
struct Cli {
    /// Path to the .csv file
    #[arg(short, long)]
    csv: String,

    /// Source node id
    #[arg(short, long)]
    source: usize,

    /// Goal node id
    #[arg(short, long)]
    goal: usize,

    /// "toposort" requires the graph reachable from the source to be acyclic.
    #[arg(short, long, default_value_t = String::from("dijkstra"))]
    algorithm: String,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn parse_csv_and_build_graph(path: &str) -> Result<AdjacencyListGraph<usize>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true) // important: skip header line
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path))?;

    let mut edges = Vec::new();

    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() < 3 {
            return Err(anyhow!("row {} has {} fields, expected 3", line + 1, record.len()));
        }
        let node_id: usize = record[0].parse().with_context(|| format!("row {}: node_id", line + 1))?;
        let neighbor_node_id: usize = record[1]
            .parse()
            .with_context(|| format!("row {}: neighbor_id", line + 1))?;
        let weight: f64 = record[2].parse().with_context(|| format!("row {}: weight", line + 1))?;
        edges.push((node_id, neighbor_node_id, weight));
    }

    Ok(AdjacencyListGraph::from_edges(edges))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    // Set the algorithm.
    let ssp = SspAlgorithm::from_name(&cli.algorithm).map_err(|e| anyhow!(e))?;

    let graph = parse_csv_and_build_graph(&cli.csv)?;
    info!(
        nodes = graph.num_vertices(),
        edges = graph.num_edges(),
        "loaded graph"
    );

    use std::time::SystemTime;
    let now = SystemTime::now();
    let solver = ssp.run(&graph, cli.source);
    let elapsed = now.elapsed().map(|d| d.as_secs_f64()).unwrap_or_default();
    debug!(millis = elapsed * 1000.0, "solved");

    let path = solver.solution(&cli.goal)?;
    let cost = solver.distance_to(&cli.goal).unwrap_or(f64::INFINITY);
    println!("Path: {:?}", path);
    println!("Cost: {:.6}", cost);
    println!("Elapsed: {:.6}s", elapsed);

    Ok(())
}
