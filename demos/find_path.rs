//! Example that builds a graph from edges given on the command line and
//! prints a shortest path between two nodes.
//!
//! Usage:
//!   cargo run --example find_path -- --edge A:B --edge B:C --edge A:D --edge D:C A C
//!   cargo run --example find_path -- --edge A:B --edge C:D --verbose A D

use std::process;

use clap::Parser;
use pathgraph::{prelude::*, tracing_support::init_tracing};

/// Build a directed graph from `SOURCE:TARGET` edges and find a path.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// An edge, written as `SOURCE:TARGET`; may be repeated
    #[arg(long = "edge", value_name = "SOURCE:TARGET")]
    edges: Vec<String>,

    /// A node with no edges; may be repeated
    #[arg(long = "node", value_name = "NODE")]
    nodes: Vec<String>,

    /// Log graph construction and the search
    #[arg(long, short)]
    verbose: bool,

    /// Start of the path
    from: String,

    /// End of the path
    to: String,
}

fn parse_edge(edge: &str) -> Result<(String, String), String> {
    match edge.split_once(':') {
        Some((source, target)) if !source.is_empty() && !target.is_empty() => {
            Ok((source.to_string(), target.to_string()))
        }
        _ => Err(format!("malformed edge '{edge}', expected SOURCE:TARGET")),
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut graph: DirectedGraph<String> = DirectedGraph::with_capacity(args.edges.len());
    for node in &args.nodes {
        graph.add_node(node.clone());
    }
    if let Err(err) = graph.try_extend(args.edges.iter().map(String::as_str).map(parse_edge)) {
        eprintln!("{err}");
        process::exit(2);
    }
    println!(
        "graph has {} nodes and {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );

    match graph.try_path(&args.from, &args.to) {
        Ok(path) => {
            let nodes: Vec<&str> = path.nodes().map(String::as_str).collect();
            println!("{}", nodes.join(" -> "));
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
