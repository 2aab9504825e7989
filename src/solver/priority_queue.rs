use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// The cost type the queue orders by, lower pops first
pub type Cost = u32;

#[derive(Debug)]
struct Entry<T> {
    cost: Cost,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max heap, flip both keys so the cheapest and then
        // oldest entry is on top
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A binary min-heap keyed by [`Cost`]. Items with the same cost pop in the
/// order they were pushed.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> PriorityQueue<T> {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// O(log n)
    pub fn push(&mut self, item: T, cost: Cost) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { cost, seq, item });
    }

    /// removes the cheapest item, O(log n)
    pub fn pop(&mut self) -> Option<(T, Cost)> {
        self.heap.pop().map(|e| (e.item, e.cost))
    }

    /// the cost of the item `pop` would return
    pub fn peek_cost(&self) -> Option<Cost> {
        self.heap.peek().map(|e| e.cost)
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// drops every item, insertion order restarts
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_first() {
        let mut q = PriorityQueue::new();
        q.push("a", 10);
        q.push("b", 2);
        q.push("c", 3);
        q.push("d", 0);
        q.push("e", Cost::MAX);

        assert_eq!(q.len(), 5);
        assert_eq!(q.peek_cost(), Some(0));

        let mut out = vec![];
        while let Some((item, _)) = q.pop() {
            out.push(item);
        }
        assert_eq!(out, vec!["d", "b", "c", "a", "e"]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let mut q = PriorityQueue::new();
        for i in 0..10 {
            q.push(i, 5);
        }
        q.push(100, 4);
        assert_eq!(q.pop(), Some((100, 4)));
        for i in 0..10 {
            assert_eq!(q.pop(), Some((i, 5)));
        }
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn test_interleaved_push_pop() {
        let mut q = PriorityQueue::new();
        q.push('x', 7);
        q.push('y', 3);
        assert_eq!(q.pop(), Some(('y', 3)));
        q.push('z', 1);
        q.push('w', 7);
        assert_eq!(q.pop(), Some(('z', 1)));
        assert_eq!(q.pop(), Some(('x', 7)));
        assert_eq!(q.pop(), Some(('w', 7)));

        q.push('v', 9);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.peek_cost(), None);
    }
}
