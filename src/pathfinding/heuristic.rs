//! Remaining-cost estimates for A*
//!
//! A heuristic is admissible when it never overestimates the true cost to
//! the goal. [`Euclidean`] is admissible only if every edge weight is at
//! least the straight-line distance between its endpoints. Graphs whose
//! weights mean something else (traversal difficulty, time) should use
//! [`Zero`] or a custom heuristic if optimal paths are required.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Estimate of the remaining cost between two positions
pub trait Heuristic {
    /// Estimated cost from `from` to `to`. Must be non-negative.
    fn estimate(&self, from: Vec3, to: Vec3) -> f32;
}

impl<F> Heuristic for F
where
    F: Fn(Vec3, Vec3) -> f32,
{
    fn estimate(&self, from: Vec3, to: Vec3) -> f32 {
        self(from, to)
    }
}

/// Straight-line distance
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    fn estimate(&self, from: Vec3, to: Vec3) -> f32 {
        from.distance(to)
    }
}

/// Always zero, which turns A* into Dijkstra's algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _from: Vec3, _to: Vec3) -> f32 {
        0.0
    }
}

/// Sum of per-axis distances.
///
/// Overestimates diagonal travel, so paths are only guaranteed optimal when
/// edge weights are at least the Manhattan distance of their endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, from: Vec3, to: Vec3) -> f32 {
        let delta = (from - to).abs();
        delta.x + delta.y + delta.z
    }
}

/// Built-in heuristic selection, usable from configuration files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeuristicKind {
    /// See [`Euclidean`]
    #[default]
    Euclidean,
    /// See [`Zero`]
    Zero,
    /// See [`Manhattan`]
    Manhattan,
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, from: Vec3, to: Vec3) -> f32 {
        match self {
            Self::Euclidean => Euclidean.estimate(from, to),
            Self::Zero => Zero.estimate(from, to),
            Self::Manhattan => Manhattan.estimate(from, to),
        }
    }
}
