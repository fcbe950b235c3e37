//! Demo router: loads a waypoint graph (or builds a small labyrinth) and
//! prints the route between two nodes.
//!
//! Usage: `waynav [graph.ron|graph.json] [start] [goal]`

use std::path::Path as FsPath;

use waynav::prelude::*;

/// Labyrinth dimensions in waypoints
const MAZE_SIZE: usize = 8;
/// Waypoint spacing in world units
const SPACING: f32 = 2.0;

/// Build a grid of waypoints with a wall down the middle and a single gap
fn build_labyrinth() -> Graph {
    let mut graph = Graph::with_capacity(MAZE_SIZE * MAZE_SIZE);
    let wall = MAZE_SIZE / 2;

    for z in 0..MAZE_SIZE {
        for x in 0..MAZE_SIZE {
            if x == wall && z != MAZE_SIZE - 1 {
                continue;
            }
            graph.add_node(Vec3::new(x as f32 * SPACING, 0.0, z as f32 * SPACING));
        }
    }

    // Orthogonal neighbours only
    graph.link_within(SPACING * 1.01);
    graph
}

fn load_graph(path: &FsPath) -> Result<Graph, GraphError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Graph::load_json(path),
        _ => Graph::load_ron(path),
    }
}

fn parse_node(
    arg: Option<&String>,
    fallback: NodeId,
) -> Result<NodeId, Box<dyn std::error::Error>> {
    match arg {
        Some(raw) => Ok(NodeId::new(raw.parse()?)),
        None => Ok(fallback),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let graph = match args.first() {
        Some(file) => {
            log::info!("Loading waypoint graph from {file}");
            load_graph(FsPath::new(file))?
        }
        None => {
            log::info!("Building demo labyrinth");
            build_labyrinth()
        }
    };
    log::info!(
        "Graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let mut ids = graph.node_ids();
    let first = ids.next().ok_or("graph has no nodes")?;
    let last = ids.last().unwrap_or(first);
    let start = parse_node(args.get(1), first)?;
    let goal = parse_node(args.get(2), last)?;

    let path = find_path(&graph, start, goal)?;
    if path.is_empty() {
        log::warn!("No path from {start} to {goal}");
        return Ok(());
    }

    log::info!(
        "Route {start} -> {goal}: {} waypoints, cost {:.2}, {} nodes expanded",
        path.len(),
        path.cost(),
        path.stats().expanded
    );
    for (id, point) in path.nodes().iter().zip(path.waypoints(&graph)) {
        println!("{id}\t{:.2}\t{:.2}\t{:.2}", point.x, point.y, point.z);
    }

    Ok(())
}
