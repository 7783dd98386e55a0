use crate::error::HeapError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    tri: u32,
    weight: u32,
}

/// Binary min-heap of `(triangle, weight)` entries with a triangle → slot
/// side table, giving O(log n) `decrease_key` without lazy duplicates.
///
/// The side table is maintained across every swap: for each queued triangle
/// `t`, `entries[positions[t]].tri == t`. Ordering among equal weights is
/// unspecified.
#[derive(Debug, Clone, Default)]
pub struct TriangleHeap {
    entries: Vec<Entry>,
    positions: Vec<Option<usize>>,
}

impl TriangleHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
            positions: vec![None; n],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries, keeping allocations for reuse.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.fill(None);
    }

    /// Queue a triangle. O(log n).
    pub fn push(&mut self, tri: u32, weight: u32) -> Result<(), HeapError> {
        let idx = tri as usize;
        if idx >= self.positions.len() {
            self.positions.resize(idx + 1, None);
        }
        if self.positions[idx].is_some() {
            return Err(HeapError::DuplicateKey(tri));
        }
        let slot = self.entries.len();
        self.entries.push(Entry { tri, weight });
        self.positions[idx] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Remove and return the least-weight entry. O(log n).
    pub fn pop_min(&mut self) -> Option<(u32, u32)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.swap_slots(0, last);
        let entry = self.entries.pop()?;
        self.positions[entry.tri as usize] = None;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((entry.tri, entry.weight))
    }

    /// Lower the weight of a queued triangle and restore heap order.
    /// O(log n).
    ///
    /// A triangle that is not queued, or a weight that is not lower than the
    /// stored one, leaves the heap untouched. The search loop only lowers
    /// keys it just improved, so an absent id means the entry was already
    /// popped and settled.
    pub fn decrease_key(&mut self, tri: u32, weight: u32) {
        let Some(&Some(slot)) = self.positions.get(tri as usize) else {
            return;
        };
        if weight >= self.entries[slot].weight {
            return;
        }
        self.entries[slot].weight = weight;
        self.sift_up(slot);
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions[self.entries[a].tri as usize] = Some(a);
        self.positions[self.entries[b].tri as usize] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[parent].weight <= self.entries[slot].weight {
                break;
            }
            self.swap_slots(parent, slot);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.entries.len() {
                break;
            }
            let right = left + 1;
            let mut least = left;
            if right < self.entries.len()
                && self.entries[right].weight < self.entries[left].weight
            {
                least = right;
            }
            if self.entries[slot].weight <= self.entries[least].weight {
                break;
            }
            self.swap_slots(slot, least);
            slot = least;
        }
    }
}
