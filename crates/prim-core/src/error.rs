// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GraphError {
    #[error("Graph matrix is empty")]
    Empty,

    #[error("Graph matrix is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Graph matrix is asymmetric at ({i}, {j}): {forward} forward vs {backward} backward")]
    Asymmetric {
        i: usize,
        j: usize,
        forward: f64,
        backward: f64,
    },

    /// Self-loops must carry weight zero
    #[error("Diagonal cell ({i}, {i}) must be zero, got {weight}")]
    NonZeroDiagonal { i: usize, weight: f64 },

    #[error("Invalid weight {weight} at ({i}, {j}): edges need a non-negative finite weight, or infinity for no edge")]
    InvalidWeight { i: usize, j: usize, weight: f64 },
}

pub type Result<T> = std::result::Result<T, GraphError>;
