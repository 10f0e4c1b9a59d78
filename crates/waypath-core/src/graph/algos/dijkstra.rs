use crate::config::HeapConfig;
use crate::error::{Result, WaypathError};
use crate::graph::props::{Color, PropertyTable};
use crate::graph::types::Distance;
use crate::graph::GraphProvider;
use crate::heap::HeapOrder;
use crate::queue::PriorityQueue;

/// Queue entry: tentative distance of a vertex.
///
/// Ordered by distance, ties broken by vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueueEntry {
    pub distance: Distance,
    pub vertex: usize,
}

/// Single-source shortest paths from `source`; weights must be non-negative.
///
/// Every vertex is enqueued once up front and keeps exactly one queue entry,
/// addressed by its handle. Relaxing a still-queued vertex replaces that entry
/// in place (decrease-key) using the `config` update strategy. Vertices are
/// colored black once dequeued. Unreachable vertices keep infinite distance.
/// Fails with `WeightOverflow` when a path weight no longer fits in `u64`.
#[tracing::instrument(skip(graph, source, config), fields(source = ?source, vertices = graph.encoding().len(), update = ?config.update, repair = ?config.repair))]
pub fn dijkstra<'g, G: GraphProvider>(
    graph: &'g G,
    source: &G::Vertex,
    config: HeapConfig,
) -> Result<PropertyTable<'g, G::Vertex>> {
    let encoding = graph.encoding();
    let start = encoding
        .encode(source)
        .ok_or_else(|| WaypathError::unknown_vertex(source))?;

    let mut table = PropertyTable::new(encoding, Some(start));
    let mut queue = PriorityQueue::with_config(HeapOrder::Min, config);
    let handles = queue.enqueue_all(
        (0..encoding.len())
            .map(|vertex| QueueEntry {
                distance: table.at(vertex).distance,
                vertex,
            })
            .collect(),
    );
    let mut in_queue = vec![true; encoding.len()];
    let mut relaxations = 0usize;

    while !queue.is_empty() {
        let QueueEntry {
            vertex: current,
            distance,
        } = queue.dequeue()?;
        in_queue[current] = false;
        table.at_mut(current).color = Color::Black;

        // Everything left is unreachable
        if distance.is_infinite() {
            continue;
        }

        for (neighbor, weight) in graph.neighbor_indices(current) {
            let candidate = distance.checked_add(weight).ok_or_else(|| {
                match encoding.decode(neighbor) {
                    Some(vertex) => WaypathError::weight_overflow(vertex),
                    None => WaypathError::weight_overflow(neighbor),
                }
            })?;
            if candidate >= table.at(neighbor).distance {
                continue;
            }

            let props = table.at_mut(neighbor);
            props.distance = candidate;
            props.parent = Some(current);
            relaxations += 1;

            if in_queue[neighbor] {
                queue.update_handle(
                    handles[neighbor],
                    QueueEntry {
                        distance: candidate,
                        vertex: neighbor,
                    },
                )?;
            }
        }
    }

    tracing::debug!(reached = table.reached(), relaxations, "dijkstra complete");
    Ok(table)
}
