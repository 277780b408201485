mod best_first;
mod frontier;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;
mod termination_condition;

pub use best_first::{BestFirstSearch, Evaluation};
pub use frontier::Frontier;
pub use search_engine::{SearchEngineName, SearchResult};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;
