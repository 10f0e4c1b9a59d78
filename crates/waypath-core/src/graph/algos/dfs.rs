use crate::graph::props::{Color, PropertyTable};
use crate::graph::types::{Distance, Weight};
use crate::graph::GraphProvider;

/// A vertex whose neighbors are still being explored
struct Frame {
    vertex: usize,
    neighbors: Vec<(usize, Weight)>,
    next: usize,
}

/// Whole-graph depth-first search.
///
/// Roots are taken in vertex order. Each vertex gets its discovery time in
/// `distance` and a strictly later `finish` time from one shared counter, so
/// the `[discovery, finish]` intervals nest like the DFS forest. Uses an
/// explicit stack; the visit order matches the recursive formulation.
#[tracing::instrument(skip(graph), fields(vertices = graph.encoding().len()))]
pub fn dfs<G: GraphProvider>(graph: &G) -> PropertyTable<'_, G::Vertex> {
    let encoding = graph.encoding();
    let mut table = PropertyTable::new(encoding, None);
    let mut time: u64 = 0;
    let mut trees = 0usize;

    for root in 0..encoding.len() {
        if table.at(root).color != Color::White {
            continue;
        }
        trees += 1;

        let mut stack = vec![discover(graph, &mut table, root, &mut time)];
        while let Some(frame) = stack.last_mut() {
            if let Some(&(neighbor, _)) = frame.neighbors.get(frame.next) {
                frame.next += 1;
                let parent = frame.vertex;
                if table.at(neighbor).color == Color::White {
                    table.at_mut(neighbor).parent = Some(parent);
                    let child = discover(graph, &mut table, neighbor, &mut time);
                    stack.push(child);
                }
            } else {
                let vertex = frame.vertex;
                stack.pop();
                time += 1;
                let props = table.at_mut(vertex);
                props.color = Color::Black;
                props.finish = Some(time);
            }
        }
    }

    tracing::debug!(trees, final_time = time, "dfs complete");
    table
}

fn discover<G: GraphProvider>(
    graph: &G,
    table: &mut PropertyTable<'_, G::Vertex>,
    vertex: usize,
    time: &mut u64,
) -> Frame {
    *time += 1;
    let props = table.at_mut(vertex);
    props.distance = Distance::new(*time);
    props.color = Color::Gray;
    Frame {
        vertex,
        neighbors: graph.neighbor_indices(vertex),
        next: 0,
    }
}
