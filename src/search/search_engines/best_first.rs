//! This module implements best-first search: one expansion loop that yields
//! A* or greedy best-first search depending on how frontier entries are
//! evaluated.

use ordered_float::OrderedFloat;
use tracing::info;

use crate::search::{
    search_engines::{
        Frontier, SearchNodeStatus, SearchResult, SearchSpace, SearchStatistics,
        TerminationCondition,
    },
    Heuristic, HeuristicValue, SearchProblem,
};

/// How frontier entries are ordered, as a function of a node's path cost `g`
/// and heuristic estimate `h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// `f = g + h`. With an admissible heuristic the first goal popped is a
    /// cheapest one.
    AStar,
    /// `f = h`. Path cost is ignored entirely, so a cheaper route to an open
    /// node is never worth recording.
    Greedy,
}

impl Evaluation {
    fn f(&self, g: HeuristicValue, h: HeuristicValue) -> HeuristicValue {
        match self {
            Evaluation::AStar => g + h,
            Evaluation::Greedy => h,
        }
    }
}

/// Best-first search over any [`SearchProblem`]. Expands the open node with
/// the lowest evaluation until a goal is popped, the frontier runs dry or a
/// resource limit fires. Duplicate states are detected and share a node;
/// under [`Evaluation::AStar`] a cheaper path to an open node lowers its
/// frontier priority and rewrites its provenance.
#[derive(Debug)]
pub struct BestFirstSearch {
    evaluation: Evaluation,
    termination: TerminationCondition,
}

impl BestFirstSearch {
    pub fn new(evaluation: Evaluation, termination: TerminationCondition) -> Self {
        Self {
            evaluation,
            termination,
        }
    }

    pub fn search<P: SearchProblem>(
        &mut self,
        problem: &P,
        mut heuristic: Box<dyn Heuristic<P>>,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut frontier = Frontier::new();
        let mut space = SearchSpace::new(problem.initial_state());
        let heuristic = heuristic.as_mut();

        let root_id = space.root_id();
        let root_h = heuristic.evaluate(space.state(root_id), problem);
        statistics.increment_evaluated_nodes();
        info!(initial_heuristic_value = root_h.into_inner());
        if root_h.is_infinite() {
            space.node_mut(root_id).mark_as_deadend();
            statistics.increment_deadend_nodes();
            return self.finish(SearchResult::Unsolvable, statistics);
        }
        space.node_mut(root_id).open(OrderedFloat(0.), root_h);
        frontier.push(root_id, self.evaluation.f(OrderedFloat(0.), root_h));

        let mut best_h = root_h;

        while let Some((node_id, _)) = frontier.pop() {
            if let Some(result) = self
                .termination
                .should_terminate(statistics.expanded_nodes())
            {
                return self.finish(result, statistics);
            }
            self.termination.log_if_needed();

            // Goal test on expansion, not generation: under A* a node may
            // still be reached more cheaply while it waits on the frontier.
            if problem.is_goal(space.state(node_id)) {
                let plan = space.extract_plan(node_id);
                return self.finish(SearchResult::Success(plan), statistics);
            }

            let node = space.node_mut(node_id);
            node.close();
            let g = node.g();
            let h = node.h();
            let depth = node.depth();
            statistics.increment_expanded_nodes();

            if h < best_h {
                best_h = h;
                info!("New best heuristic value: {}", h.into_inner());
                statistics.log();
            }

            let actions = problem.applicable_actions(space.state(node_id));
            statistics.increment_generated_actions(actions.len());

            for action in actions {
                let state = space.state(node_id);
                let g_child = g + problem.step_cost(state, &action);
                let successor = problem.result(state, &action);
                let child_id = space.insert_or_get(successor, node_id, &action);

                let status = space.node(child_id).status();
                match status {
                    SearchNodeStatus::New => {
                        statistics.increment_generated_nodes();
                        let h_child = heuristic.evaluate(space.state(child_id), problem);
                        statistics.increment_evaluated_nodes();
                        if h_child.is_infinite() {
                            space.node_mut(child_id).mark_as_deadend();
                            statistics.increment_deadend_nodes();
                        } else {
                            space.node_mut(child_id).open(g_child, h_child);
                            frontier.push(child_id, self.evaluation.f(g_child, h_child));
                        }
                    }
                    SearchNodeStatus::Open => {
                        let f_child = self.evaluation.f(g_child, space.node(child_id).h());
                        if frontier.improve(child_id, f_child) {
                            space
                                .node_mut(child_id)
                                .update_path(g_child, node_id, action, depth + 1);
                            statistics.increment_improved_paths();
                        }
                    }
                    SearchNodeStatus::Closed | SearchNodeStatus::Deadend => {}
                }
            }
        }

        self.finish(SearchResult::Unsolvable, statistics)
    }

    fn finish<A>(
        &mut self,
        result: SearchResult<A>,
        mut statistics: SearchStatistics,
    ) -> (SearchResult<A>, SearchStatistics) {
        statistics.finalise_search();
        self.termination.finalise();
        (result, statistics)
    }
}
