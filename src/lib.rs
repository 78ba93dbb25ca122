//! Counts square-sum permutations: orderings of the integers 1..=n in
//! which every pair of consecutive elements sums to a perfect square.
//! Equivalently, Hamiltonian paths through the graph on 1..=n whose
//! edges join pairs with a square sum.

pub mod adjacency;
pub mod config;
pub mod error;
pub mod observer;
pub mod report;
pub mod search;
mod squares;

pub use adjacency::AdjacencyMap;
pub use config::Config;
pub use error::{Result, SquareSumsError};
pub use observer::{NoProgress, ProgressLog, ProgressObserver, StartEvent};
pub use report::write_progress_csv;
pub use search::{MAX_DOMAIN, count_paths, count_permutations, count_permutations_with};
