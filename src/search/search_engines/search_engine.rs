use crate::search::{
    search_engines::{BestFirstSearch, Evaluation, TerminationCondition},
    HeuristicName,
};
use clap;

/// Outcome of a search run, generic over the action type of the problem that
/// was searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// A goal state was reached; the actions lead to it from the initial
    /// state
    Success(Vec<A>),
    /// The reachable state space was exhausted without finding a goal, so no
    /// plan exists
    Unsolvable,
    /// The search expanded its node budget before reaching a goal
    NodeLimitExceeded,
    /// The search ran out of time
    TimeLimitExceeded,
    /// The search ran out of memory
    MemoryLimitExceeded,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    /// A* search, ordered by path cost plus heuristic; finds minimum-length
    /// plans when the heuristic is admissible
    #[clap(name = "astar")]
    AStar,
    /// Greedy best-first search, ordered by the heuristic alone; usually
    /// faster, no optimality guarantee
    Gbfs,
}

impl SearchEngineName {
    pub fn create(&self, termination: TerminationCondition) -> BestFirstSearch {
        match self {
            SearchEngineName::AStar => BestFirstSearch::new(Evaluation::AStar, termination),
            SearchEngineName::Gbfs => BestFirstSearch::new(Evaluation::Greedy, termination),
        }
    }

    /// The heuristic used when the command line does not name one.
    pub fn default_heuristic(&self) -> HeuristicName {
        match self {
            SearchEngineName::AStar => HeuristicName::DeliveryBound,
            SearchEngineName::Gbfs => HeuristicName::DetourSum,
        }
    }
}
