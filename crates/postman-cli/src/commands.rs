//! Command handlers.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use postman_core::{solve, Graph, PostmanConfig, Solution};
use serde::Serialize;
use std::path::Path;

use crate::loader::load_edge_list;
use crate::samples::{self, SAMPLES};

/// Where the graph to solve comes from.
pub enum GraphSource<'a> {
    Sample(&'a str),
    File(&'a Path),
}

/// Machine-readable solve output.
#[derive(Serialize)]
struct SolveReport<'a> {
    graph: &'a str,
    strategy: &'static str,
    original_cost: f64,
    route_cost: f64,
    dead_end_doublings: usize,
    matching_edges_added: usize,
    attempts: usize,
    complete: bool,
    route: &'a [String],
}

pub fn cmd_list() -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "Edges", "Nodes", "Odd nodes", "Description"]);

    for sample in SAMPLES {
        let graph = sample.graph()?;
        table.add_row(vec![
            Cell::new(sample.name),
            Cell::new(graph.edge_count()),
            Cell::new(graph.node_count()),
            Cell::new(graph.odd_nodes().len()),
            Cell::new(sample.description),
        ]);
    }

    println!("{table}");
    Ok(())
}

pub fn cmd_config(config: &PostmanConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn cmd_solve(
    source: &GraphSource<'_>,
    start: Option<&str>,
    config: &PostmanConfig,
    json: bool,
) -> Result<()> {
    let (label, graph) = match source {
        GraphSource::Sample(name) => {
            let Some(sample) = samples::find(name) else {
                bail!("Unknown sample '{name}'. Run `postman list` to see the samples.");
            };
            (sample.name.to_string(), sample.graph()?)
        }
        GraphSource::File(path) => (path.display().to_string(), load_edge_list(path)?),
    };

    let start = start.map(str::to_string);
    let solution = solve(&graph, start.as_ref(), config)
        .with_context(|| format!("Failed to solve '{label}'"))?;

    if json {
        print_json(&label, &solution, config)
    } else {
        print_text(&label, &graph, &solution, config);
        Ok(())
    }
}

fn print_json(label: &str, solution: &Solution<String>, config: &PostmanConfig) -> Result<()> {
    let report = SolveReport {
        graph: label,
        strategy: config.pairing.strategy.as_str(),
        original_cost: solution.original_cost(),
        route_cost: solution.route_cost(),
        dead_end_doublings: solution.eulerization.dead_end_doublings,
        matching_edges_added: solution.eulerization.matching_edges_added(),
        attempts: solution.walk.attempts,
        complete: solution.is_complete(),
        route: &solution.walk.route,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_text(
    label: &str,
    graph: &Graph<String>,
    solution: &Solution<String>,
    config: &PostmanConfig,
) {
    let eulerization = &solution.eulerization;
    println!(
        "{} {} ({} edges, {} nodes, {} odd)",
        "Graph:".bold(),
        label.green(),
        graph.edge_count(),
        graph.node_count(),
        graph.odd_nodes().len()
    );

    if eulerization.is_unchanged() {
        println!("Already Eulerian, no edges added.");
    } else {
        println!(
            "Eulerized with {}: +{} edges ({} dead-end, {} matching)",
            config.pairing.strategy.as_str().cyan(),
            eulerization.edges_added(),
            eulerization.dead_end_doublings,
            eulerization.matching_edges_added()
        );
    }
    println!(
        "Cost: {} original, {} with backtracking",
        solution.original_cost(),
        solution.route_cost()
    );

    let walk = &solution.walk;
    if walk.is_complete() {
        println!(
            "\n{} {} attempt(s):\n{}",
            "Solved in".green().bold(),
            walk.attempts,
            walk.route.join(" -> ")
        );
    } else {
        println!(
            "\n{}",
            format!("Gave up after {} attempts.", walk.attempts).red().bold()
        );
    }
}
