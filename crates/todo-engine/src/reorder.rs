//! Drag-Reorder Index Arithmetic
//!
//! Pure helpers behind the drop protocol: the pointer's half of the
//! target row decides insert-before vs insert-after, and the computed
//! index is shifted down by one when the source sat above it.

/// Which half of the candidate row the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropHalf {
    Before,
    After,
}

/// Resolve the insertion index for dropping `source` onto `candidate`.
pub fn resolve_target_index(source: usize, candidate: usize, half: DropHalf) -> usize {
    let mut target = match half {
        DropHalf::After => candidate + 1,
        DropHalf::Before => candidate,
    };
    // Removing the source first shifts everything after it up by one.
    if source < target {
        target -= 1;
    }
    target
}

/// Remove-then-insert move. Returns false (list untouched) when the
/// source is out of bounds or the move is a no-op; the target index is
/// clamped to the post-removal bounds.
pub fn move_item<T>(items: &mut Vec<T>, source: usize, target: usize) -> bool {
    if source >= items.len() || source == target {
        return false;
    }
    let moved = items.remove(source);
    let bounded = target.min(items.len());
    items.insert(bounded, moved);
    true
}
