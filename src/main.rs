use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use maze_navigate::{Maze, SearchOutcome};

#[derive(Parser, Debug)]
#[command(version)]
#[command(about = "Find the shortest START to EXIT path through a maze file", long_about = None)]
struct Args {
    /// Maze description: header line, then name,x,y,slot1,slot2 per node
    maze: PathBuf,

    /// Print every search step in the order nodes were explored
    #[arg(short, long)]
    animate: bool,

    /// Print every node with its position and connections
    #[arg(short, long)]
    nodes: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG, when set, takes precedence over -v
    env_logger::Builder::new()
        .filter_level(level(args.verbose))
        .parse_default_env()
        .init();

    let mut maze = Maze::new();
    if let Err(e) = maze.load_file(&args.maze) {
        eprintln!("Failed to load {}: {}", args.maze.display(), e);
        return ExitCode::FAILURE;
    }

    let graph = maze.graph();
    println!("Loaded {}", args.maze.display());
    println!(
        "Nodes: {} ({} declared), connections: {}, grid {}x{}",
        graph.len(),
        graph.declared_node_count(),
        graph.edges().len(),
        graph.columns(),
        graph.rows()
    );

    if args.nodes {
        for node in graph.nodes() {
            println!("  {node}");
        }
    }

    let solution = maze.solve();

    if args.animate {
        for (step, path) in solution.trace.iter().enumerate() {
            println!("step {:>3}: {}", step + 1, path.join(" -> "));
        }
    }

    match solution.outcome {
        SearchOutcome::Found => {
            println!(
                "Path found ({} steps, {} nodes explored): {}",
                solution.edge_count().unwrap_or(0),
                solution.explored(),
                solution.path.join(" -> ")
            );
        }
        SearchOutcome::NoStart => println!("No path exists in this maze: there is no START node."),
        SearchOutcome::Unreachable => {
            println!("No path exists in this maze: EXIT is not reachable from START.")
        }
    }

    ExitCode::SUCCESS
}
