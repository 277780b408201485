use crate::search::HeuristicValue;

/// Index of a node in its [`SearchSpace`](crate::search::search_engines::SearchSpace)
/// arena. Ids are dense, start at 0 (the root) and are only meaningful within
/// the space that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(super) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(super) fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is on the frontier
    Open,
    /// Node has been expanded; equivalently, its state is in the explored set
    Closed,
    /// Node can never reach a goal, the engine will not put it on the frontier
    Deadend,
}

/// One record of the search tree: a state (held by the arena under the same
/// id), the provenance that produced it, and the bookkeeping values the
/// engine orders the frontier by.
#[derive(Debug, Clone)]
pub struct SearchNode<A> {
    id: NodeId,
    status: SearchNodeStatus,
    /// Cost of the best known path from the root to this node.
    g: HeuristicValue,
    /// Cached heuristic estimate; a state's estimate never changes, so it is
    /// computed once even when the path to the node improves.
    h: HeuristicValue,
    /// Number of actions on the best known path from the root.
    depth: u32,
    /// Action applied to the parent to reach this node, [`None`] for the root.
    action: Option<A>,
    /// Node this one was generated from, [`None`] for the root. Parents form
    /// a tree: ids strictly decrease towards the root, so walking them
    /// terminates.
    parent: Option<NodeId>,
}

impl<A> SearchNode<A> {
    pub(super) fn new_without_parent(id: NodeId) -> Self {
        Self {
            id,
            status: SearchNodeStatus::New,
            g: HeuristicValue::from(f64::INFINITY),
            h: HeuristicValue::from(f64::INFINITY),
            depth: 0,
            action: None,
            parent: None,
        }
    }

    pub(super) fn new_with_parent(id: NodeId, parent: NodeId, action: A, depth: u32) -> Self {
        Self {
            id,
            status: SearchNodeStatus::New,
            g: HeuristicValue::from(f64::INFINITY),
            h: HeuristicValue::from(f64::INFINITY),
            depth,
            action: Some(action),
            parent: Some(parent),
        }
    }

    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::New,
            "node must be new to open it"
        );
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
    }

    /// Replaces the provenance of an open node because a strictly cheaper
    /// path to it was found. The cached `h` stays, only `g`, the parent link,
    /// the action and the depth change.
    pub fn update_path(&mut self, g: HeuristicValue, parent: NodeId, action: A, depth: u32) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "only open nodes can have their path improved"
        );
        debug_assert!(g < self.g, "the new path must be strictly cheaper");
        self.g = g;
        self.parent = Some(parent);
        self.action = Some(action);
        self.depth = depth;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn mark_as_deadend(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::New,
            "only unopened nodes are marked as dead ends"
        );
        self.status = SearchNodeStatus::Deadend;
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn g(&self) -> HeuristicValue {
        self.g
    }

    pub fn h(&self) -> HeuristicValue {
        self.h
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}
