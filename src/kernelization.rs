//! This module includes the reduction rules used to shrink a vertex cover instance to its kernel
//! and the exact search over the kernel.
//! These rules include:
//! * `Pendant`-rule, which looks for a vertex of degree 1 and adds its neighbor to the solution.
//! * `HighDegree`-rule, which adds a vertex whose degree exceeds the remaining budget `k` to the
//! solution, since any cover of size at most `k` that misses it would need all its neighbors.
//!
//! Both rules remove the added vertex from the graph and decrement `k`.

use log::{debug, warn};
use crate::Cover;
use crate::dichotomous::dichotomous_search;
use crate::graph::Graph;

pub const ALL_RULES: &[Rule] = &[Rule::Pendant, Rule::HighDegree];

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Rule {
    Pendant,
    HighDegree,
}

/// A reduced instance: the graph after exhaustive reduction, the vertices taken by the rules and
/// what is left of the budget.
#[derive(Debug, Clone)]
pub struct Kernel {
    pub graph: Graph,
    pub solution: Cover,
    pub budget: usize,
    /// Number of rounds in which at least one rule applied.
    pub rounds: usize,
    /// Non-isolated vertices of `graph`, ascending. Filled by `Graph::reduce()`.
    pub vertices: Vec<usize>,
}

impl Kernel {

    fn new(graph: Graph, budget: usize) -> Self {
        Kernel {
            graph,
            solution: Cover::default(),
            budget,
            rounds: 0,
            vertices: Vec::new(),
        }
    }

    /// Adds `u` to the solution, isolates it and charges it to the budget.
    /// The budget saturates at zero.
    fn take(&mut self, u: usize) {
        self.solution.insert(u);
        self.graph.remove_vertex(u);
        if self.budget == 0 {
            warn!("budget exhausted while reducing, vertex {} taken without budget", u);
        } else {
            self.budget -= 1;
        }
    }

    /// Applies `rule` once. Returns `true` if it applied.
    pub fn apply_rule(&mut self, rule: Rule) -> bool {
        match rule {
            Rule::Pendant => {
                if let Some(leaf) = self.graph.take_vertex_of_degree_exactly_1() {
                    let neighbor = self.graph.first_neighbor(leaf).expect("`leaf` has degree 1");
                    self.take(neighbor);
                    return true
                }
                false
            },
            Rule::HighDegree => {
                if let Some(u) = self.graph.take_vertex_of_degree_greater_than(self.budget) {
                    self.take(u);
                    return true
                }
                false
            },
        }
    }

    /// Applies every rule of `priority_list` once per round, in order, until a round passes
    /// without any reduction.
    pub fn exhaustive_rules(&mut self, priority_list: &[Rule]) {
        loop {
            let mut changed = false;
            for rule in priority_list {
                changed |= self.apply_rule(*rule);
            }
            if !changed {
                break
            }
            self.rounds += 1;
        }
    }

    /// Searches for a subset of exactly `size` kernel vertices that covers the reduced graph.
    /// Subsets are enumerated by including each kernel vertex before excluding it, and the
    /// first one that covers is returned.
    pub fn find_cover(&self, size: usize) -> Option<Cover> {
        let mut chosen = Cover::default();
        if self.combine(&self.vertices, size, &mut chosen) {
            return Some(chosen)
        }
        None
    }

    fn combine(&self, candidates: &[usize], size: usize, chosen: &mut Cover) -> bool {
        if chosen.len() == size {
            return self.graph.is_vertex_cover(chosen)
        }
        let (first, rest) = match candidates.split_first() {
            Some(split) if candidates.len() >= size - chosen.len() => split,
            _ => return false,
        };
        chosen.insert(*first);
        if self.combine(rest, size, chosen) {
            return true
        }
        chosen.remove(first);
        self.combine(rest, size, chosen)
    }

}

impl Graph {

    /// Reduces a copy of `self` by exhaustively applying all rules, starting with budget `k`.
    pub fn reduce(&self, k: usize) -> Kernel {
        let mut kernel = Kernel::new(self.modifiable_copy(), k);
        kernel.exhaustive_rules(ALL_RULES);
        kernel.vertices = kernel.graph.non_isolated_vertices();
        debug!(
            "reduced in {} rounds: {} vertices taken, kernel of {} vertices and {} edges, budget {}",
            kernel.rounds,
            kernel.solution.len(),
            kernel.vertices.len(),
            kernel.graph.num_edges(),
            kernel.budget
        );
        kernel
    }

    /// Computes a minimum vertex cover.
    ///
    /// The graph is reduced with the size of the 2-approximation as budget. If edges remain, the
    /// smallest covering subset of the kernel is located by dichotomous search between half the
    /// 2-approximation of the reduced graph and the smaller of that approximation and the
    /// remaining budget.
    pub fn kernelization(&self) -> Cover {
        let kernel = self.reduce(self.two_approximation().len());
        if kernel.vertices.is_empty() {
            return kernel.solution
        }
        let approx = kernel.graph.two_approximation();
        let t = approx.len();
        let subset = dichotomous_search(t / 2, t.min(kernel.budget), approx, |size| kernel.find_cover(size));
        let mut solution = kernel.solution;
        solution.extend(subset);
        debug!("kernelization found a cover of size {}", solution.len());
        solution
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Friendship graph: center 0 and the triangles (0,1,2), (0,3,4), (0,5,6), (0,7,8).
    fn friendship() -> Graph {
        let mut edges: Vec<(usize, usize)> = (1..9).map(|leaf| (0, leaf)).collect();
        edges.extend(vec![(1, 2), (3, 4), (5, 6), (7, 8)]);
        Graph::from_edges(9, edges).unwrap()
    }

    #[test]
    fn pendant_rule_test() {
        // Path 0 - 1 - 2 - 3
        let path = Graph::from_edges(4, vec![(0, 1), (1, 2), (2, 3)]).unwrap();
        let kernel = path.reduce(4);
        assert_eq!(kernel.solution, vec![1, 3].into_iter().collect::<Cover>());
        assert_eq!(kernel.budget, 2);
        assert_eq!(kernel.rounds, 2);
        assert!(kernel.vertices.is_empty());
        assert_eq!(kernel.graph.num_edges(), 0);
    }

    #[test]
    fn star_reduces_in_one_round_test() {
        let star = Graph::from_edges(7, (1..7).map(|leaf| (0, leaf))).unwrap();
        let kernel = star.reduce(star.two_approximation().len());
        assert_eq!(kernel.rounds, 1);
        assert_eq!(kernel.solution, vec![0].into_iter().collect::<Cover>());
        assert_eq!(star.kernelization(), vec![0].into_iter().collect::<Cover>());
    }

    #[test]
    fn high_degree_rule_test() {
        let mut kernel = Kernel::new(friendship(), 6);
        assert!(!kernel.apply_rule(Rule::Pendant));
        assert!(kernel.apply_rule(Rule::HighDegree));
        assert_eq!(kernel.solution, vec![0].into_iter().collect::<Cover>());
        assert_eq!(kernel.budget, 5);
        assert!(!kernel.apply_rule(Rule::HighDegree));
        assert!(kernel.apply_rule(Rule::Pendant));
        assert!(kernel.solution.contains(&2));
    }

    #[test]
    fn exhaustive_rules_test() {
        let kernel = friendship().reduce(6);
        assert_eq!(kernel.solution, vec![0, 2, 4, 6, 8].into_iter().collect::<Cover>());
        assert_eq!(kernel.budget, 1);
        assert_eq!(kernel.rounds, 5);
        assert!(kernel.vertices.is_empty());
    }

    #[test]
    fn budget_saturates_test() {
        let graph = friendship();
        let kernel = graph.reduce(3);
        assert_eq!(kernel.budget, 0);
        assert_eq!(kernel.solution.len(), 5);
        assert!(graph.is_vertex_cover(&kernel.solution));
    }

    #[test]
    fn find_cover_test() {
        // 5-cycle: nothing reduces.
        let cycle = Graph::from_edges(5, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
        let kernel = cycle.reduce(4);
        assert!(kernel.solution.is_empty());
        assert_eq!(kernel.vertices, vec![0, 1, 2, 3, 4]);
        assert_eq!(kernel.find_cover(2), None);
        assert_eq!(kernel.find_cover(3), Some(vec![0, 1, 3].into_iter().collect::<Cover>()));
        assert_eq!(kernel.find_cover(6), None);
        assert_eq!(cycle.kernelization().len(), 3);
    }

    #[test]
    fn kernelization_test() {
        let gr = Cursor::new("p td 16 33\n1 2\n1 3\n1 4\n1 5\n1 6\n2 3\n2 4\n2 5\n2 10\n\
                              3 4\n3 5\n3 9\n4 5\n4 8\n5 7\n6 11\n6 12\n7 13\n8 14\n\
                              9 15\n10 16\n11 12\n11 13\n11 15\n11 16\n12 13\n12 14\n\
                              12 16\n13 14\n13 15\n14 15\n14 16\n15 16\n");
        let graph = Graph::read_gr(gr);
        assert!(graph.is_ok());
        let graph = graph.unwrap();
        let opt_sol = graph.kernelization();
        assert!(graph.is_vertex_cover(&opt_sol));
        assert_eq!(opt_sol.len(), 10);
    }

    #[test]
    fn kernelization_small_graphs_test() {
        assert!(Graph::empty(3).kernelization().is_empty());
        let single = Graph::from_edges(2, vec![(0, 1)]).unwrap();
        assert_eq!(single.kernelization(), vec![1].into_iter().collect::<Cover>());
        let complete = Graph::random_seeded(5, 1.0, 0).unwrap();
        assert_eq!(complete.kernelization().len(), 4);
        assert_eq!(friendship().kernelization().len(), 5);
    }

}
