// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Console driver: one `step()` per node, printed as it happens.

use anyhow::Result;
use colored::*;
use prettytable::{Cell, Row, Table};
use prim_core::{Graph, PrimBuilder, StepOutcome};
use serde_json::json;
use tracing::debug;

pub fn run(json: bool) -> Result<()> {
    let graph = Graph::example();
    let n = graph.node_count();
    let mut builder = PrimBuilder::new(graph);

    if !json {
        println!("{}", "Prim's algorithm, step by step:".bold());
        println!();
    }

    // N steps visit every node of the demo graph; the terminal outcomes are
    // still matched so a disconnected matrix degrades to a notice instead of
    // a wrong tree.
    for _ in 0..n {
        match builder.step() {
            StepOutcome::Annexed(a) => {
                debug!(node = a.node, weight = a.weight, "annexed");
                if json {
                    println!(
                        "{}",
                        json!({
                            "event": "annexed",
                            "node": a.node,
                            "parent": a.parent,
                            "weight": a.weight,
                            "relaxations": a.relaxations,
                        })
                    );
                    continue;
                }
                match a.parent {
                    Some(p) => println!(
                        "{} node {} via edge ({}, {}) with weight {}",
                        "Annexed".green().bold(),
                        a.node,
                        p,
                        a.node,
                        a.weight
                    ),
                    None => println!(
                        "{} node {} as the root of the tree",
                        "Annexed".green().bold(),
                        a.node
                    ),
                }
                for r in &a.relaxations {
                    println!(
                        "   - node {}: new parent = {}, new cost = {}",
                        r.node, r.parent, r.key
                    );
                }
            }
            StepOutcome::Completed => break,
            StepOutcome::Unreachable => {
                if json {
                    println!("{}", json!({ "event": "unreachable" }));
                } else {
                    println!(
                        "{}",
                        "No more reachable nodes; the graph is disconnected.".yellow()
                    );
                }
                break;
            }
        }
    }

    let edges = builder.tree_edges();

    if json {
        println!(
            "{}",
            json!({
                "event": "summary",
                "status": builder.status(),
                "edges": edges,
                "total_cost": builder.total_cost(),
            })
        );
        return Ok(());
    }

    println!();
    println!("{}", "Resulting spanning tree:".bold());
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Source").style_spec("bf"),
        Cell::new("Target").style_spec("bf"),
        Cell::new("Weight").style_spec("bf"),
    ]));
    for e in &edges {
        table.add_row(Row::new(vec![
            Cell::new(&e.source.to_string()),
            Cell::new(&e.target.to_string()),
            Cell::new(&e.weight.to_string()),
        ]));
    }
    table.printstd();
    println!("{}", format!("Total cost: {}", builder.total_cost()).dimmed());

    Ok(())
}
