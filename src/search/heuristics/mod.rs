mod delivery_bound;
mod detour_sum;
mod heuristic;
mod zero_heuristic;

pub use delivery_bound::DeliveryBound;
pub use detour_sum::DetourSum;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue, DEAD_END};
pub use zero_heuristic::ZeroHeuristic;
