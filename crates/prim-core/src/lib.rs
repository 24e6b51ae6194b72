// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod error;
pub mod graph;
pub mod prim;

// Re-exports for convenience
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use prim::{
    Annexation, PrimBuilder, Relaxation, START_NODE, Status, StepOutcome, TreeEdge,
};
