use std::collections::HashMap;
use std::hash::{BuildHasher, Hash, RandomState};

use segvec::{Linear, SegVec};
use smallvec::{smallvec, SmallVec};

use crate::search::search_engines::{NodeId, SearchNode};

/// The arena behind one search invocation: it owns every state the engine
/// has materialised together with its [`SearchNode`], both addressed by the
/// same [`NodeId`]. The registry maps canonical states to ids, so two action
/// sequences converging on the same state always land on the same node. The
/// segmented vectors never move pushed elements, keeping ids stable for the
/// lifetime of the space.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    nodes: SegVec<SearchNode<A>, Linear>,
    states: SegVec<S, Linear>,
    /// State hash to the ids carrying that hash. Buckets are resolved by
    /// exact state equality, so a hash collision costs a comparison, never a
    /// wrongly merged node.
    registry: HashMap<u64, SmallVec<[NodeId; 1]>>,
    build_hasher: RandomState,
}

impl<S: Hash + Eq, A: Clone> SearchSpace<S, A> {
    pub fn new(initial_state: S) -> Self {
        let build_hasher = RandomState::new();

        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registry = HashMap::new();

        let root_id = NodeId::new(0);
        registry.insert(build_hasher.hash_one(&initial_state), smallvec![root_id]);
        nodes.push(SearchNode::new_without_parent(root_id));
        states.push(initial_state);

        Self {
            nodes,
            states,
            registry,
            build_hasher,
        }
    }

    pub fn root_id(&self) -> NodeId {
        NodeId::new(0)
    }

    /// The id registered for `state`. If the state was never seen before, a
    /// fresh node is created with the given provenance and its depth derived
    /// from the parent; otherwise the existing node is returned untouched and
    /// the provenance arguments are dropped (whether the known path should be
    /// replaced is the engine's decision, made through
    /// [`SearchNode::update_path`]).
    pub fn insert_or_get(&mut self, state: S, parent: NodeId, action: &A) -> NodeId {
        let hash = self.build_hasher.hash_one(&state);
        let depth = self
            .nodes
            .get(parent.index())
            .expect("invalid parent id")
            .depth()
            + 1;

        let bucket = self.registry.entry(hash).or_default();
        for &id in bucket.iter() {
            if self.states.get(id.index()).expect("registry id out of range") == &state {
                return id;
            }
        }

        let id = NodeId::new(self.nodes.len());
        bucket.push(id);
        self.nodes
            .push(SearchNode::new_with_parent(id, parent, action.clone(), depth));
        self.states.push(state);
        id
    }

    pub fn node(&self, id: NodeId) -> &SearchNode<A> {
        self.nodes.get(id.index()).expect("invalid node id")
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SearchNode<A> {
        self.nodes.get_mut(id.index()).expect("invalid node id")
    }

    pub fn state(&self, id: NodeId) -> &S {
        self.states.get(id.index()).expect("invalid node id")
    }

    /// Number of distinct states registered so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The action sequence from the root to `goal`, reconstructed by walking
    /// parent links and reversing.
    pub fn extract_plan(&self, goal: NodeId) -> Vec<A> {
        let mut plan = vec![];
        let mut node = self.node(goal);
        while let Some(parent) = node.parent() {
            let action = node.action().expect("non-root nodes carry an action");
            plan.push(action.clone());
            node = self.node(parent);
        }
        plan.reverse();
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converging_paths_share_a_node() {
        let mut space: SearchSpace<&str, char> = SearchSpace::new("start");
        let root = space.root_id();

        let left = space.insert_or_get("left", root, &'l');
        let right = space.insert_or_get("right", root, &'r');
        assert_ne!(left, right);
        assert_eq!(space.len(), 3);

        // reaching "right" again, via a different action, is not a new node
        let again = space.insert_or_get("right", left, &'x');
        assert_eq!(again, right);
        assert_eq!(space.len(), 3);
        // and the original provenance is untouched
        assert_eq!(space.node(right).action(), Some(&'r'));
        assert_eq!(space.node(right).parent(), Some(root));
    }

    #[test]
    fn depth_follows_the_parent() {
        let mut space: SearchSpace<&str, char> = SearchSpace::new("start");
        let root = space.root_id();
        assert_eq!(space.node(root).depth(), 0);

        let a = space.insert_or_get("a", root, &'a');
        let b = space.insert_or_get("b", a, &'b');
        assert_eq!(space.node(a).depth(), 1);
        assert_eq!(space.node(b).depth(), 2);
    }

    #[test]
    fn extract_plan_walks_back_to_the_root() {
        let mut space: SearchSpace<&str, char> = SearchSpace::new("start");
        let root = space.root_id();
        let a = space.insert_or_get("a", root, &'a');
        let b = space.insert_or_get("b", a, &'b');
        let c = space.insert_or_get("c", b, &'c');

        assert_eq!(space.extract_plan(c), vec!['a', 'b', 'c']);
        assert_eq!(space.extract_plan(root), Vec::<char>::new());
    }
}
