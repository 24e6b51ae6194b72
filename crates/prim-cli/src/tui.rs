// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Interactive display: the growing tree on a canvas, stepped by key press.
//!
//! The simulator state lives in `prim-core`; this module only reads it and
//! re-renders every frame, so stepping, resetting, and quitting are the
//! whole event vocabulary.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use prim_core::{Graph, PrimBuilder, Status, StepOutcome};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
    },
};
use tracing::debug;

/// Key-event poll interval.
const TICK_MS: u64 = 100;

/// Fixed node positions on the canvas (y-up), one per demo-graph node.
const NODE_LAYOUT: [(f64, f64); 5] = [
    (60.0, 170.0),
    (180.0, 290.0),
    (300.0, 170.0),
    (120.0, 50.0),
    (240.0, 50.0),
];

const CANVAS_WIDTH: f64 = 360.0;
const CANVAS_HEIGHT: f64 = 330.0;
const NODE_RADIUS: f64 = 14.0;

pub fn run() -> Result<()> {
    let mut sim = PrimBuilder::new(Graph::example());
    assert_eq!(
        NODE_LAYOUT.len(),
        sim.node_count(),
        "layout table must cover every node"
    );

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut sim);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    sim: &mut PrimBuilder,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, sim))?;

        if !event::poll(Duration::from_millis(TICK_MS))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('s') | KeyCode::Char(' ') => match sim.step() {
                    StepOutcome::Annexed(a) => {
                        debug!(node = a.node, weight = a.weight, "annexed")
                    }
                    StepOutcome::Completed => debug!("already complete"),
                    StepOutcome::Unreachable => debug!("remainder unreachable"),
                },
                KeyCode::Char('r') => sim.reset(),
                _ => {}
            }
        }
    }
    Ok(())
}

fn render(frame: &mut Frame, sim: &PrimBuilder) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(48), Constraint::Length(36)])
        .split(frame.area());

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Graph"))
        .x_bounds([0.0, CANVAS_WIDTH])
        .y_bounds([0.0, CANVAS_HEIGHT])
        .paint(|ctx| draw_graph(ctx, sim));
    frame.render_widget(canvas, chunks[0]);

    frame.render_widget(state_panel(sim), chunks[1]);
}

fn draw_graph(ctx: &mut Context, sim: &PrimBuilder) {
    // All graph edges, dim, with the weight at the midpoint
    for (i, j, w) in sim.graph().edges() {
        let (x1, y1) = NODE_LAYOUT[i];
        let (x2, y2) = NODE_LAYOUT[j];
        ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color: Color::DarkGray,
        });
        ctx.print(
            (x1 + x2) / 2.0,
            (y1 + y2) / 2.0,
            Line::from(Span::styled(
                w.to_string(),
                Style::default().fg(Color::Gray),
            )),
        );
    }

    // Parent edges over the base layer
    for e in sim.tree_edges() {
        let (x1, y1) = NODE_LAYOUT[e.source];
        let (x2, y2) = NODE_LAYOUT[e.target];
        ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color: Color::LightBlue,
        });
    }

    // Nodes last so the circles sit on top of the edge lines
    for i in 0..sim.node_count() {
        let (x, y) = NODE_LAYOUT[i];
        let color = if sim.is_visited(i) {
            Color::Green
        } else {
            Color::White
        };
        ctx.draw(&Circle {
            x,
            y,
            radius: NODE_RADIUS,
            color,
        });
        ctx.print(
            x,
            y,
            Line::from(Span::styled(
                i.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        );
    }
}

fn state_panel(sim: &PrimBuilder) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Step {}", sim.steps()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for i in 0..sim.node_count() {
        let key = format_key(sim.key(i));
        let parent = sim
            .parent(i)
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        let (marker, style) = if sim.is_visited(i) {
            ("●", Style::default().fg(Color::Green))
        } else {
            ("○", Style::default())
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} {i}  key {key:>3}  parent {parent}"),
            style,
        )));
    }

    lines.push(Line::from(""));
    match sim.status() {
        Status::Running => {}
        Status::Completed => {
            lines.push(Line::from(Span::styled(
                "Spanning tree complete.",
                Style::default().fg(Color::Green),
            )));
            lines.push(Line::from(format!("Total cost: {}", sim.total_cost())));
        }
        Status::Unreachable => {
            lines.push(Line::from(Span::styled(
                "No more reachable nodes.",
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "s/space step  r reset  q quit",
        Style::default().fg(Color::DarkGray),
    )));

    Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("State"))
}

fn format_key(key: f64) -> String {
    if key.is_finite() {
        key.to_string()
    } else {
        "∞".to_string()
    }
}
