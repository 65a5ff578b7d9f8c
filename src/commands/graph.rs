//! `myos graph` command - graph summary, focus view and dangling edges

use std::collections::HashSet;

use serde::Serialize;

use crate::cli::{Cli, GraphArgs, OutputFormat};
use crate::commands::format::{enriched_line, print_json};
use myos_core::error::{MyosError, Result};
use myos_core::graph::{dangling_links, neighborhood, EnrichedNote, GraphSummary};
use myos_core::store::Store;

#[derive(Serialize)]
struct Edge<'a> {
    from: &'a str,
    to: &'a str,
    resolved: bool,
}

#[derive(Serialize)]
struct GraphOutput<'a> {
    summary: GraphSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus: Option<&'a str>,
    nodes: Vec<&'a EnrichedNote>,
    edges: Vec<Edge<'a>>,
}

/// Execute the graph command
pub fn execute(cli: &Cli, store: &mut Store, args: &GraphArgs) -> Result<()> {
    if args.dangling {
        return print_dangling(cli, store);
    }

    let view = store.enriched();
    let summary = GraphSummary::from_view(&view);

    let focus_set = match args.focus.as_deref() {
        Some(id) => Some(neighborhood(&view, id).ok_or_else(|| MyosError::not_found(id))?),
        None => None,
    };

    let nodes: Vec<&EnrichedNote> = view
        .iter()
        .filter(|n| focus_set.as_ref().is_none_or(|set| set.contains(n.id())))
        .filter(|n| !args.connected || n.is_connected())
        .collect();

    let in_view: HashSet<&str> = nodes.iter().map(|n| n.id()).collect();
    let edges: Vec<Edge<'_>> = nodes
        .iter()
        .copied()
        .flat_map(|n| {
            let in_view = &in_view;
            n.note.links.iter().map(move |target| Edge {
                from: n.id(),
                to: target,
                resolved: in_view.contains(target.as_str()),
            })
        })
        .collect();

    let output = GraphOutput {
        summary,
        focus: args.focus.as_deref(),
        nodes,
        edges,
    };

    match cli.format {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Human => print_human(&output),
    }

    Ok(())
}

fn print_human(output: &GraphOutput<'_>) {
    let s = &output.summary;
    println!(
        "{} notes, {} edges ({} resolved, {} dangling), {} isolated",
        s.notes, s.edges, s.resolved_edges, s.dangling_edges, s.isolated
    );
    if let Some(focus) = output.focus {
        println!("Focus: {}", focus);
    }
    if output.nodes.is_empty() {
        return;
    }
    println!();
    for node in &output.nodes {
        println!("{}", enriched_line(node));
    }
    if !output.edges.is_empty() {
        println!();
        for edge in &output.edges {
            let marker = if edge.resolved { "" } else { "  (outside view)" };
            println!("  {} -> {}{}", edge.from, edge.to, marker);
        }
    }
}

fn print_dangling(cli: &Cli, store: &Store) -> Result<()> {
    let dangling = dangling_links(store.notes());

    match cli.format {
        OutputFormat::Json => {
            let edges: Vec<serde_json::Value> = dangling
                .iter()
                .map(|(from, to)| serde_json::json!({ "from": from, "to": to }))
                .collect();
            print_json(&edges)?;
        }
        OutputFormat::Human => {
            if dangling.is_empty() {
                if !cli.quiet {
                    println!("No dangling links");
                }
            } else {
                for (from, to) in &dangling {
                    println!("{} -> {}  (missing)", from, to);
                }
            }
        }
    }

    Ok(())
}
