use anyhow::{anyhow, Context, Result};
use clap::Parser;
use csv::{ReaderBuilder, Writer};
use seams::{
    seam_cost, DynamicProgrammingSeamFinder, GenerativeSeamFinder, Grid, GridEnergy, Picture,
    SeamFinder, SspAlgorithm, Transposed, TransposedEnergy,
};
use tracing::{debug, info, Level};

#[derive(Parser, Debug)]
#[command(name = "seam")]
#[command(about = "Find the minimum-energy seam through a grid of costs read from a CSV file.", long_about = None)]
struct Cli {
    /// Path to a header-less CSV of numbers; row y, column x holds the cost of pixel (x, y)
    #[arg(short, long)]
    grid: String,

    #[arg(short, long, default_value_t = String::from("toposort"))]
    algorithm: String,

    /// Find a top-to-bottom seam instead of a left-to-right one
    #[arg(long, default_value_t = false)]
    vertical: bool,

    /// Output CSV (x, y) of the seam pixels. If omitted, prints the seam to stdout.
    #[arg(short, long)]
    out: Option<String>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

enum SeamAlgorithm {
    Graph(SspAlgorithm),
    Tabulation,
}

impl SeamAlgorithm {
    fn from(string: &str) -> Result<Self> {
        match string {
            "toposort" => Ok(SeamAlgorithm::Graph(SspAlgorithm::Toposort)),
            "dijkstra" => Ok(SeamAlgorithm::Graph(SspAlgorithm::Dijkstra)),
            "dp" => Ok(SeamAlgorithm::Tabulation),
            _ => Err(anyhow!(
                "Algorithm not found for input string: {}, possible options are: (\"toposort\", \"dijkstra\", \"dp\")",
                string
            )),
        }
    }

    fn run(&self, grid: &Grid, vertical: bool) -> seams::Result<Vec<usize>> {
        match (self, vertical) {
            (SeamAlgorithm::Graph(ssp), false) => {
                GenerativeSeamFinder::new(*ssp).find_horizontal(grid, &GridEnergy)
            }
            (SeamAlgorithm::Graph(ssp), true) => {
                GenerativeSeamFinder::new(*ssp).find_vertical(grid, &GridEnergy)
            }
            (SeamAlgorithm::Tabulation, false) => {
                DynamicProgrammingSeamFinder.find_horizontal(grid, &GridEnergy)
            }
            (SeamAlgorithm::Tabulation, true) => {
                DynamicProgrammingSeamFinder.find_vertical(grid, &GridEnergy)
            }
        }
    }
}

fn read_grid(path: &str) -> Result<Grid> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path))?;

    let mut rows = Vec::new();
    for (y, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("reading row {} of {}", y, path))?;
        let row = record
            .iter()
            .enumerate()
            .map(|(x, field)| {
                field
                    .parse::<f64>()
                    .with_context(|| format!("cost at ({}, {}) is not a number: {:?}", x, y, field))
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok(Grid::from_rows(rows)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    // Set Algorithm.
    let algorithm = SeamAlgorithm::from(&cli.algorithm)?;

    let grid = read_grid(&cli.grid)?;
    info!(width = grid.width(), height = grid.height(), "loaded cost grid");

    use std::time::SystemTime;
    let now = SystemTime::now();
    let seam = algorithm.run(&grid, cli.vertical)?;
    let elapsed = now.elapsed().map(|d| d.as_secs_f64()).unwrap_or_default();
    debug!(seconds = elapsed, "seam search finished");

    let cost = if cli.vertical {
        seam_cost(&Transposed(&grid), &TransposedEnergy(&GridEnergy), &seam)
    } else {
        seam_cost(&grid, &GridEnergy, &seam)
    };

    if let Some(out_path) = cli.out {
        let mut wtr =
            Writer::from_path(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        wtr.write_record(["x", "y"])?;
        for (i, &j) in seam.iter().enumerate() {
            let (x, y) = if cli.vertical { (j, i) } else { (i, j) };
            wtr.write_record(&[x.to_string(), y.to_string()])?;
        }
        wtr.flush()?;
        println!("Wrote {} seam pixels to {}", seam.len(), out_path);
    } else {
        println!("Seam: {:?}", seam);
    }
    println!("Total energy: {:.6}", cost);
    println!("Elapsed: {:.6}s", elapsed);

    Ok(())
}
