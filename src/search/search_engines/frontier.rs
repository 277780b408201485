use std::cmp::Reverse;

use priority_queue::PriorityQueue;

use crate::search::search_engines::NodeId;
use crate::search::HeuristicValue;

/// Priority of a frontier entry: the evaluation value first, the insertion
/// sequence second. The sequence makes ties deterministic: among equal
/// evaluations the frontier behaves as a FIFO queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Priority {
    f: HeuristicValue,
    sequence: u64,
}

/// The open list: node ids ordered by an evaluation value, lowest first.
/// Each id appears at most once; a better path to an id already on the
/// frontier updates its priority in place instead of queueing a duplicate.
#[derive(Debug)]
pub struct Frontier {
    queue: PriorityQueue<NodeId, Reverse<Priority>>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, id: NodeId, f: HeuristicValue) {
        let priority = self.next_priority(f);
        self.queue.push(id, Reverse(priority));
    }

    /// Lowers the priority of an id already on the frontier. `f` must be
    /// strictly better than the entry's current value, otherwise the frontier
    /// is left untouched; returns whether the entry changed. An improved
    /// entry requeues behind existing entries of equal value, as if freshly
    /// inserted.
    pub fn improve(&mut self, id: NodeId, f: HeuristicValue) -> bool {
        match self.queue.get_priority(&id) {
            Some(&Reverse(current)) if f < current.f => {
                let priority = self.next_priority(f);
                self.queue.change_priority(&id, Reverse(priority));
                true
            }
            _ => false,
        }
    }

    /// Removes and returns the minimum entry, ties broken FIFO.
    pub fn pop(&mut self) -> Option<(NodeId, HeuristicValue)> {
        self.queue
            .pop()
            .map(|(id, Reverse(priority))| (id, priority.f))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn next_priority(&mut self, f: HeuristicValue) -> Priority {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        Priority { f, sequence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: usize) -> NodeId {
        NodeId::new(index)
    }

    #[test]
    fn pops_lowest_evaluation_first() {
        let mut frontier = Frontier::new();
        frontier.push(id(1), 5.0.into());
        frontier.push(id(2), 3.0.into());
        frontier.push(id(3), 4.0.into());

        assert_eq!(frontier.pop(), Some((id(2), 3.0.into())));
        assert_eq!(frontier.pop(), Some((id(3), 4.0.into())));
        assert_eq!(frontier.pop(), Some((id(1), 5.0.into())));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn equal_evaluations_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        for index in 0..4 {
            frontier.push(id(index), 1.0.into());
        }
        let order: Vec<NodeId> = std::iter::from_fn(|| frontier.pop().map(|(id, _)| id)).collect();
        assert_eq!(order, vec![id(0), id(1), id(2), id(3)]);
    }

    #[test]
    fn improve_requires_a_strictly_better_value() {
        let mut frontier = Frontier::new();
        frontier.push(id(1), 5.0.into());
        frontier.push(id(2), 4.0.into());

        assert!(!frontier.improve(id(1), 5.0.into()), "equal is not better");
        assert!(!frontier.improve(id(1), 6.0.into()), "worse is not better");
        assert!(!frontier.improve(id(9), 1.0.into()), "unknown id");
        assert_eq!(frontier.len(), 2);

        assert!(frontier.improve(id(1), 2.0.into()));
        assert_eq!(frontier.len(), 2, "improvement must not duplicate the id");
        assert_eq!(frontier.pop(), Some((id(1), 2.0.into())));
        assert_eq!(frontier.pop(), Some((id(2), 4.0.into())));
    }

    #[test]
    fn improved_entry_requeues_behind_equal_values() {
        let mut frontier = Frontier::new();
        frontier.push(id(1), 9.0.into());
        frontier.push(id(2), 3.0.into());
        frontier.improve(id(1), 3.0.into());

        assert_eq!(frontier.pop(), Some((id(2), 3.0.into())));
        assert_eq!(frontier.pop(), Some((id(1), 3.0.into())));
    }
}
