use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use csv::Writer;

use city_broadcast::{dijkstra, parser, CityGraph, CityId, Outcome, Report, SearchError, Time};

#[derive(Parser, Debug)]
#[command(name = "broadcast")]
#[command(about = "Read a city data file and report how long a message from one city takes to reach every other city.", long_about = None)]
struct Cli {
    /// Path to the city data file
    input: String,

    /// City the broadcast starts from
    #[arg(short, long, default_value_t = 0)]
    source: CityId,

    #[arg(short, long, value_enum, default_value_t = Algorithm::Heap)]
    algorithm: Algorithm,

    /// Output CSV (city, arrival_time)
    #[arg(short, long)]
    out: Option<String>,

    /// Include unreachable cities in the CSV output
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,

    /// Print graph size and timing
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Indexed min-heap with linear lookup
    Heap,
    /// std BinaryHeap with lazy deletion
    Dijkstra,
    /// orx-priority-queue with decrease-key
    Orx,
}

impl Algorithm {
    fn run(&self, graph: &CityGraph, source: CityId) -> Result<Report> {
        let arrivals = match self {
            Algorithm::Heap => return Ok(city_broadcast::broadcast_from(graph, source)?),
            Algorithm::Dijkstra => dijkstra::dijkstra_all(graph, source),
            Algorithm::Orx => dijkstra::dijkstra_indexed(graph, source),
        };
        Ok(Report {
            outcome: Outcome::from_arrivals(&arrivals),
            arrivals,
        })
    }
}

fn check_source(graph: &CityGraph, source: CityId) -> Result<()> {
    if source >= graph.num_cities() {
        return Err(SearchError::SourceOutOfRange {
            city: source,
            num_cities: graph.num_cities(),
        }
        .into());
    }
    Ok(())
}

fn result_line(outcome: &Outcome) -> String {
    match outcome {
        Outcome::ReachedAll { max_time } => format!(
            "The time taken for the message to reach all cities is {}",
            max_time
        ),
        Outcome::Unreachable { .. } => String::from("No path found"),
    }
}

fn write_csv(path: &str, arrivals: &[Option<Time>], include_unreachable: bool) -> Result<usize> {
    let mut wtr = Writer::from_path(path).with_context(|| format!("creating CSV {}", path))?;
    wtr.write_record(["city", "arrival_time"])?;
    let mut rows: Vec<(CityId, Option<Time>)> = arrivals.iter().copied().enumerate().collect();
    // Reached cities by time, then the unreachable ones.
    rows.sort_by_key(|&(city, t)| (t.is_none(), t, city));
    let mut written = 0;
    for (city, t) in rows {
        let val = match t {
            Some(t) => t.to_string(),
            None if include_unreachable => String::from("unreachable"),
            None => continue,
        };
        wtr.write_record(&[city.to_string(), val])?;
        written += 1;
    }
    wtr.flush()?;
    Ok(written)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let graph = parser::parse_file(&cli.input)
        .with_context(|| format!("reading city data from {}", &cli.input))?;
    if cli.verbose {
        println!(
            "Graph: {} cities, {} edges",
            graph.num_cities(),
            graph.num_edges()
        );
    }
    check_source(&graph, cli.source)?;

    use std::time::SystemTime;
    let now = SystemTime::now();
    let report = cli.algorithm.run(&graph, cli.source)?;
    if cli.verbose {
        if let Ok(elapsed) = now.elapsed() {
            println!("{:?}: {} s", cli.algorithm, elapsed.as_secs_f64());
        }
    }

    if let Outcome::Unreachable { reached } = report.outcome {
        if cli.verbose {
            println!("Reached {} of {} cities", reached, graph.num_cities());
        }
    }
    println!("{}", result_line(&report.outcome));

    if let Some(out_path) = cli.out {
        let written = write_csv(&out_path, &report.arrivals, cli.include_unreachable)?;
        if cli.verbose {
            println!("Wrote arrival times for {} cities to {}", written, out_path);
        }
    }

    Ok(())
}
