pub mod graph;
pub mod cust_error;
pub mod vc_instance;
pub mod dichotomous;
pub mod heuristics;
pub mod bounded_search;
pub mod kernelization;

/// A set of vertices that should touch every edge.
pub type Cover = fxhash::FxHashSet<usize>;
