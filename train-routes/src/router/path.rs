//! Full station sequence reconstruction from the `via` pivots.

use crate::domain::StationId;

use super::table::RouteTable;

/// Expand the route from `from` to `to` into its station sequence.
///
/// A direct cell contributes its two endpoints; a cell with pivot `k`
/// expands to the route to `k` followed by the route from `k`, read from the
/// finished table. Returns `None` if the pair is unreachable.
pub(crate) fn expand(table: &RouteTable, from: StationId, to: StationId) -> Option<Vec<StationId>> {
    let length = table.get(from, to)?.length;
    let mut path = Vec::with_capacity(length + 1);
    path.push(from);
    push_hops(table, from, to, &mut path)?;
    Some(path)
}

/// Append every station after `from` on the route to `to`.
fn push_hops(
    table: &RouteTable,
    from: StationId,
    to: StationId,
    path: &mut Vec<StationId>,
) -> Option<()> {
    let cell = table.get(from, to)?;

    match cell.via {
        None => path.push(to),
        Some(via) => {
            // Both halves are strictly shorter, which bounds the recursion.
            let left = table.get(from, via)?.length;
            let right = table.get(via, to)?.length;
            if left >= cell.length || right >= cell.length {
                return None;
            }
            push_hops(table, from, via, path)?;
            push_hops(table, via, to, path)?;
        }
    }

    Some(())
}
