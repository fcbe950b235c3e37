//! A* search over a waypoint graph
//!
//! The frontier is a binary heap with lazy insertion: improving a node's
//! cost pushes a fresh entry and outdated entries are dropped when popped.
//! Entries are ordered by f-score, then by lowest node id, so equal inputs
//! always produce the same path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use super::{Heuristic, Path, SearchConfig, SearchStats};
use crate::graph::{Graph, NodeId};

/// Frontier entry for priority queue
#[derive(Debug, Clone, Copy)]
struct OpenNode {
    id: NodeId,
    f_cost: f32, // g_cost + heuristic
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the cheapest path from `start` to `goal` using the Euclidean
/// heuristic and no iteration cap.
///
/// Returns an empty [`Path`] when the goal is unreachable. The result is
/// optimal as long as every edge weight is at least the straight-line
/// distance between its endpoints.
///
/// # Errors
///
/// Returns an error if `start` or `goal` is not a node of `graph`
pub fn find_path(graph: &Graph, start: NodeId, goal: NodeId) -> Result<Path, PathError> {
    find_path_with(graph, start, goal, &SearchConfig::default())
}

/// Find a path using the heuristic and iteration cap from `config`
///
/// # Errors
///
/// Returns an error if `start` or `goal` is not a node of `graph`
pub fn find_path_with(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    config: &SearchConfig,
) -> Result<Path, PathError> {
    search(graph, start, goal, &config.heuristic, config.max_iterations)
}

/// Find a path with a caller-supplied heuristic and no iteration cap
///
/// # Errors
///
/// Returns an error if `start` or `goal` is not a node of `graph`
pub fn find_path_with_heuristic<H: Heuristic + ?Sized>(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    heuristic: &H,
) -> Result<Path, PathError> {
    search(graph, start, goal, heuristic, None)
}

fn search<H: Heuristic + ?Sized>(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    heuristic: &H,
    max_iterations: Option<usize>,
) -> Result<Path, PathError> {
    let start_pos = graph.position(start).ok_or(PathError::InvalidStart(start))?;
    let goal_pos = graph.position(goal).ok_or(PathError::InvalidGoal(goal))?;

    let mut open_set = BinaryHeap::new();
    let mut closed_set: FxHashSet<NodeId> = FxHashSet::default();
    let mut came_from: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut g_score: FxHashMap<NodeId, f32> = FxHashMap::default();
    let mut f_score: FxHashMap<NodeId, f32> = FxHashMap::default();
    let mut stats = SearchStats::default();

    let start_f = heuristic.estimate(start_pos, goal_pos);
    g_score.insert(start, 0.0);
    f_score.insert(start, start_f);
    open_set.push(OpenNode {
        id: start,
        f_cost: start_f,
    });
    stats.pushed += 1;

    while let Some(OpenNode { id: current, f_cost }) = open_set.pop() {
        // Outdated entry: node already finalized or re-queued cheaper
        if closed_set.contains(&current)
            || f_score.get(&current).is_some_and(|&best| f_cost > best)
        {
            continue;
        }

        let g_current = g_score.get(&current).copied().unwrap_or(f32::INFINITY);

        if current == goal {
            let nodes = reconstruct_path(&came_from, goal);
            log::debug!(
                "Path {start} -> {goal}: {} nodes, cost {g_current}, {} expanded",
                nodes.len(),
                stats.expanded
            );
            return Ok(Path::new(nodes, g_current, stats));
        }

        if max_iterations.is_some_and(|max| stats.expanded >= max) {
            stats.budget_exhausted = true;
            log::debug!(
                "Search {start} -> {goal} gave up after {} expansions",
                stats.expanded
            );
            return Ok(Path::not_found(stats));
        }

        closed_set.insert(current);
        stats.expanded += 1;

        for (neighbor, weight) in graph.neighbors(current) {
            if closed_set.contains(&neighbor) {
                continue;
            }

            let tentative_g = g_current + weight;
            if g_score.get(&neighbor).is_some_and(|&g| tentative_g >= g) {
                continue;
            }

            let h = graph
                .position(neighbor)
                .map_or(0.0, |pos| heuristic.estimate(pos, goal_pos));
            let f = tentative_g + h;

            came_from.insert(neighbor, current);
            g_score.insert(neighbor, tentative_g);
            f_score.insert(neighbor, f);
            open_set.push(OpenNode {
                id: neighbor,
                f_cost: f,
            });
            stats.pushed += 1;
        }
    }

    log::trace!("No path {start} -> {goal}");
    Ok(Path::not_found(stats))
}

/// Walk predecessors back from `goal`, then reverse
fn reconstruct_path(came_from: &FxHashMap<NodeId, NodeId>, goal: NodeId) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }

    path.reverse();
    path
}

/// Errors that can occur when starting a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// Start node is not part of the graph
    InvalidStart(NodeId),
    /// Goal node is not part of the graph
    InvalidGoal(NodeId),
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStart(id) => write!(f, "Start node {id} is not in the graph"),
            Self::InvalidGoal(id) => write!(f, "Goal node {id} is not in the graph"),
        }
    }
}

impl std::error::Error for PathError {}
