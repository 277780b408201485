use std::fmt::Debug;

use ordered_float::OrderedFloat;

use crate::search::heuristics::{DeliveryBound, DetourSum, ZeroHeuristic};
use crate::search::{SearchProblem, WateringTask};

pub type HeuristicValue = OrderedFloat<f64>;

/// An infinite estimate marks a state as a dead end: the engine will never
/// put such a node on the frontier.
pub const DEAD_END: HeuristicValue = OrderedFloat(f64::INFINITY);

pub trait Heuristic<P: SearchProblem>: Debug {
    /// Estimate the cost of reaching a goal from the given state. Estimates
    /// must be non-negative; [`DEAD_END`] means no goal is reachable.
    /// Evaluation is total, it never fails on a reachable state.
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "Admissible lower bound built from outstanding pours, missing loads and \
        a travel bound. The right choice for astar, where it guarantees optimal plans.")]
    DeliveryBound,
    #[clap(help = "Per-plant distance-plus-tap-detour estimate. Cheap and informative but \
        inadmissible, intended for gbfs.")]
    DetourSum,
    #[clap(name = "zero", help = "The zero heuristic.")]
    Zero,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic<WateringTask>> {
        match self {
            HeuristicName::DeliveryBound => Box::new(DeliveryBound::new()),
            HeuristicName::DetourSum => Box::new(DetourSum::new()),
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
        }
    }
}
