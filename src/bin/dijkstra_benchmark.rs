use std::{error::Error, fs::File, io::BufReader, path::PathBuf};

use clap::{Parser, ValueEnum};
use relaxed_paths::{
    graphs::{graph_factory::GraphFactory, graph_functions::validate_path},
    logging::init_tracing,
    search::{
        collections::frontier::FrontierKind, dijkstra::Dijkstra, options::SearchOptions,
        path::ShortestPathTestCase, PathFinding,
    },
    utility::benchmark,
};

/// Does a single threaded benchmark of every frontier kind on the test cases
/// written by `create_tests`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in `.fmi`, `.gr` or `.bincode` format
    #[arg(short, long)]
    graph: PathBuf,
    /// Test cases in json format
    #[arg(short, long)]
    test_cases: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(false)?;

    let graph = GraphFactory::from_file(&args.graph)?;
    let reader = BufReader::new(File::open(&args.test_cases)?);
    let test_cases: Vec<ShortestPathTestCase> = serde_json::from_reader(reader)?;

    for frontier in FrontierKind::value_variants() {
        let options = SearchOptions::default().with_frontier(*frontier);
        let dijkstra = Dijkstra::with_options(&graph, options);

        for test_case in &test_cases {
            let path = dijkstra.shortest_path(&test_case.request);
            validate_path(&graph, test_case, &path)
                .map_err(|reason| format!("{:?}: {:?}: {}", frontier, test_case, reason))?;
        }

        let average = benchmark(&dijkstra, &test_cases);
        println!("{:?}: average query duration is {:?}", frontier, average);
    }

    Ok(())
}
