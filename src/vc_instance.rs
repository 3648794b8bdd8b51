use std::fmt;
use std::io::{self, Write};
use crate::Cover;
use crate::cust_error::ProcessingError;
use crate::graph::Graph;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Algorithm {
    TwoApproximation,
    BoundedSearchTree,
    Kernelization,
}

impl Algorithm {

    pub const ALL: [Algorithm; 3] = [
        Algorithm::TwoApproximation,
        Algorithm::BoundedSearchTree,
        Algorithm::Kernelization,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::TwoApproximation => "2-Approx",
            Algorithm::BoundedSearchTree => "BoundedSearchTree",
            Algorithm::Kernelization => "Kernelization",
        }
    }

    /// Returns `true` if the algorithm always finds a minimum vertex cover.
    pub fn is_exact(&self) -> bool {
        !matches!(self, Algorithm::TwoApproximation)
    }

}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Runs `algorithm` on a private copy of `graph`.
pub fn solve(graph: &Graph, algorithm: Algorithm) -> Cover {
    match algorithm {
        Algorithm::TwoApproximation => graph.two_approximation(),
        Algorithm::BoundedSearchTree => graph.bounded_search_tree(),
        Algorithm::Kernelization => graph.kernelization(),
    }
}

/// Statistics of a graph together with the covers found by every algorithm.
#[derive(Debug, Clone)]
pub struct CoverReport {
    pub num_vertices: usize,
    pub num_edges: usize,
    pub max_degree: usize,
    pub average_degree: f64,
    pub results: Vec<(Algorithm, Cover)>,
}

impl CoverReport {

    /// Runs all algorithms, in the order of `Algorithm::ALL`, on `graph`.
    pub fn compute(graph: &Graph) -> Self {
        CoverReport {
            num_vertices: graph.num_vertices(),
            num_edges: graph.num_edges(),
            max_degree: graph.max_degree(),
            average_degree: graph.average_degree(),
            results: Algorithm::ALL.iter().map(|algo| (*algo, solve(graph, *algo))).collect(),
        }
    }

    /// Returns the cover found by `algorithm`.
    pub fn cover(&self, algorithm: Algorithm) -> Option<&Cover> {
        self.results.iter().find(|(algo, _)| *algo == algorithm).map(|(_, cover)| cover)
    }

    /// Checks every result against `graph`.
    pub fn validate(&self, graph: &Graph) -> Result<(), ProcessingError> {
        for (algo, cover) in &self.results {
            if !graph.is_vertex_cover(cover) {
                return Err(ProcessingError::InvalidSolution(format!("{} missed an edge", algo)))
            }
        }
        Ok(())
    }

    /// Writes the statistics and every cover in a human readable form.
    pub fn write<W: Write>(&self, mut out: W) -> Result<(), io::Error> {
        writeln!(out, "n : {}", self.num_vertices)?;
        writeln!(out, "m : {}", self.num_edges)?;
        writeln!(out, "average degree : {:.2}", self.average_degree)?;
        writeln!(out, "max degree : {}", self.max_degree)?;
        for (algo, cover) in &self.results {
            writeln!(out)?;
            writeln!(out, "-------- {} --------", algo)?;
            writeln!(out, "size : {}", cover.len())?;
            writeln!(out, "MVC : {:?}", sorted(cover))?;
        }
        Ok(())
    }

}

/// Returns the vertices of `cover` in ascending order.
pub fn sorted(cover: &Cover) -> Vec<usize> {
    let mut vertices: Vec<usize> = cover.iter().copied().collect();
    vertices.sort_unstable();
    vertices
}

/// Writes a solution to a `Write` type, one vertex per line in ascending order.
pub fn write_solution<W: Write>(solution: &Cover, mut out: W) -> Result<(), io::Error> {
    for elem in sorted(solution) {
        writeln!(out, "{}", elem)?;
    }
    Ok(())
}
