use std::collections::VecDeque;

use crate::error::{Result, WaypathError};
use crate::graph::props::{Color, PropertyTable};
use crate::graph::types::Distance;
use crate::graph::GraphProvider;

/// Breadth-first search from `source`.
///
/// On return every reached vertex is black with its hop count from `source`
/// as distance and its BFS-tree predecessor as parent; unreached vertices
/// stay white at infinite distance.
#[tracing::instrument(skip(graph, source), fields(source = ?source, vertices = graph.encoding().len()))]
pub fn bfs<'g, G: GraphProvider>(
    graph: &'g G,
    source: &G::Vertex,
) -> Result<PropertyTable<'g, G::Vertex>> {
    let encoding = graph.encoding();
    let start = encoding
        .encode(source)
        .ok_or_else(|| WaypathError::unknown_vertex(source))?;

    let mut table = PropertyTable::new(encoding, Some(start));
    table.at_mut(start).color = Color::Gray;

    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        // Hop counts stay below the vertex count
        let hops = table.at(current).distance.value().unwrap_or_default();
        let next_distance = Distance::new(hops + 1);
        for (neighbor, _) in graph.neighbor_indices(current) {
            let props = table.at_mut(neighbor);
            if props.color == Color::White {
                props.color = Color::Gray;
                props.distance = next_distance;
                props.parent = Some(current);
                queue.push_back(neighbor);
            }
        }
        table.at_mut(current).color = Color::Black;
    }

    tracing::debug!(reached = table.reached(), "bfs complete");
    Ok(table)
}
