//! Implementation of the classical 2-approximation for the Vertex Cover Problem.

use log::debug;
use crate::Cover;
use crate::graph::Graph;

impl Graph {

    /// Approximates the solution by repeatedly taking the first remaining edge, adding both of
    /// its endpoints to the solution and isolating them, until no edge remains.
    /// The chosen edges form a maximal matching, so the resulting solution is, in the worst case,
    /// twice as large as the optimal solution.
    ///
    /// Returns the approximated solution.
    pub fn two_approximation(&self) -> Cover {
        let mut clone = self.modifiable_copy();
        let mut solution = Cover::default();
        while let Some((u, v)) = clone.take_edge() {
            solution.insert(u);
            clone.remove_vertex(u);
            solution.insert(v);
            clone.remove_vertex(v);
        }
        debug!("2-approximation picked {} vertices", solution.len());
        solution
    }

}
