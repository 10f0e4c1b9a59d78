//! Path reconstruction from traversal results

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, WaypathError};
use crate::graph::props::PropertyTable;

/// Walk parent pointers back from `target` to the vertex with no parent.
///
/// Fails with `UnknownVertex` if `target` is not in the graph and with
/// `Unreachable` if the traversal never reached it.
pub fn reconstruct_path<'g, V>(table: &PropertyTable<'g, V>, target: &V) -> Result<Vec<&'g V>>
where
    V: Clone + Eq + Hash + Debug,
{
    let encoding = table.encoding();
    let mut current = encoding
        .encode(target)
        .ok_or_else(|| WaypathError::unknown_vertex(target))?;
    if table.at(current).distance.is_infinite() {
        return Err(WaypathError::unreachable(target));
    }

    let mut indices = vec![current];
    while let Some(parent) = table.at(current).parent {
        // Parent links form a forest; a longer walk means a corrupted table
        if indices.len() > encoding.len() {
            return Err(WaypathError::Other(format!(
                "parent cycle while reconstructing path to {:?}",
                target
            )));
        }
        indices.push(parent);
        current = parent;
    }

    Ok(indices
        .into_iter()
        .rev()
        .filter_map(|i| encoding.decode(i))
        .collect())
}
