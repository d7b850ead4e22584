use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use subway_explorer::catalog::RouteCatalog;
use subway_explorer::index::StopIndex;
use subway_explorer::mbta::{MbtaClient, MbtaConfig, MockMbtaClient};
use subway_explorer::planner::{Planner, SearchOutcome};
use subway_explorer::source::TransitSource;
use subway_explorer::stats::{stop_statistics, transfer_stops};

/// Explore the MBTA subway: list the routes, compare their stop counts,
/// show the transfer stops, and find a rail route between two stops.
#[derive(Parser)]
struct Args {
    /// Stop to travel from (prompted for when omitted)
    #[arg(long)]
    from: Option<String>,

    /// Stop to travel to (prompted for when omitted)
    #[arg(long)]
    to: Option<String>,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Serve canned responses from this directory instead of the live API
    #[arg(long)]
    mock_dir: Option<PathBuf>,

    /// Request timeout in seconds (transport default when omitted)
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if let Some(dir) = &args.mock_dir {
        let mock = MockMbtaClient::new(dir).expect("Failed to load mock fixtures");
        run(&mock, &args).await;
    } else {
        let mut config = MbtaConfig::new();
        // The API accepts anonymous requests; a key only raises the rate
        // limit.
        if let Ok(key) = std::env::var("MBTA_API_KEY") {
            config = config.with_api_key(key);
        }
        if let Some(url) = &args.base_url {
            config = config.with_base_url(url);
        }
        if let Some(secs) = args.timeout {
            config = config.with_timeout(secs);
        }

        let client = MbtaClient::new(config).expect("Failed to create MBTA client");
        run(&client, &args).await;
    }
}

async fn run<S: TransitSource>(source: &S, args: &Args) {
    let catalog = RouteCatalog::fetch(source)
        .await
        .expect("Failed to fetch subway routes");

    println!("Subway routes:");
    for name in catalog.long_names() {
        println!("  {name}");
    }
    println!();

    let index = StopIndex::fetch(&catalog, source)
        .await
        .expect("Failed to fetch route stops");

    let stats = stop_statistics(&catalog, &index);
    println!("Routes with the most stops:");
    for (name, count) in &stats.most {
        println!("  {name}: {count} stops");
    }
    println!();

    println!("Routes with the fewest stops:");
    for (name, count) in &stats.fewest {
        println!("  {name}: {count} stops");
    }
    println!();

    println!("Transfer stops (served by two or more routes):");
    for (stop, routes) in transfer_stops(&catalog, &index) {
        println!("  {stop}: {}", routes.join(", "));
    }
    println!();

    let start = match &args.from {
        Some(stop) => stop.clone(),
        None => prompt("Stop you are traveling from: "),
    };
    let end = match &args.to {
        Some(stop) => stop.clone(),
        None => prompt("Stop you are traveling to: "),
    };

    let planner = Planner::new(&catalog, &index);
    match planner.plan(&start, &end) {
        SearchOutcome::Found(names) => {
            println!(
                "A rail route from {start} to {end}: {}",
                names.join(", ")
            );
        }
        SearchOutcome::SameStop => {
            println!("Start and end stops are the same; no rail route needed.");
        }
        SearchOutcome::UnknownStop(stop) => {
            println!("No route found: no subway stop named \"{stop}\".");
        }
        SearchOutcome::NoPath => {
            println!("No route found between {start} and {end}.");
        }
    }
}

/// Print a prompt and read one trimmed line from stdin.
fn prompt(message: &str) -> String {
    print!("{message}");
    io::stdout().flush().expect("Failed to flush stdout");

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read stdin");
    line.trim().to_string()
}
