#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(subtrahend <= capacity);
    (index + capacity - subtrahend) % capacity
}

/// Splits the logical region `[head, head + count)` of a ring of `capacity`
/// slots into its two physical runs: `head..` up to the end of the array, and
/// the part that wrapped around to index 0.
#[inline]
pub fn physical_runs(head: usize, count: usize, capacity: usize) -> ((usize, usize), (usize, usize)) {
    debug_assert!(head < capacity);
    debug_assert!(count <= capacity);
    if head + count <= capacity {
        ((head, head + count), (0, 0))
    } else {
        ((head, capacity), (0, head + count - capacity))
    }
}
