//! Implementation of a bounded search tree algorithm combined with a dichotomous search over
//! the size of the cover.

use log::debug;
use crate::Cover;
use crate::dichotomous::dichotomous_search;
use crate::graph::Graph;

impl Graph {

    /// Computes a minimum vertex cover.
    ///
    /// The size `t` of the 2-approximation bounds the optimum to `[t/2, t]`. Within this window
    /// the smallest `k` for which `search_tree()` finds a cover is located by dichotomous search.
    /// The approximated solution serves as witness for `t` itself.
    pub fn bounded_search_tree(&self) -> Cover {
        let approx = self.two_approximation();
        let t = approx.len();
        let solution = dichotomous_search(t / 2, t, approx, |k| self.search_tree(k));
        debug!("bounded search tree found a cover of size {} (upper bound {})", solution.len(), t);
        solution
    }

    /// Searches for a vertex cover with at most `k` vertices.
    /// Returns `None` if no such cover exists.
    ///
    /// Every cover contains an endpoint of any given edge, so branching on both endpoints of the
    /// first edge is exhaustive. The first endpoint is always tried first.
    pub fn search_tree(&self, k: usize) -> Option<Cover> {
        let mut chosen = Vec::new();
        if self.branch(k, &mut chosen) {
            return Some(chosen.into_iter().collect())
        }
        None
    }

    fn branch(&self, k: usize, chosen: &mut Vec<usize>) -> bool {
        let (u, v) = match self.take_edge() {
            Some(edge) => edge,
            None => return true,
        };
        if k == 0 {
            return false
        }
        for endpoint in [u, v] {
            chosen.push(endpoint);
            if self.subgraph(endpoint).branch(k - 1, chosen) {
                return true
            }
            chosen.pop();
        }
        false
    }

}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use crate::Cover;
    use crate::graph::Graph;

    #[test]
    fn bounded_search_tree_test() {
        let gr = Cursor::new("p td 16 33\n1 2\n1 3\n1 4\n1 5\n1 6\n2 3\n2 4\n2 5\n2 10\n\
                              3 4\n3 5\n3 9\n4 5\n4 8\n5 7\n6 11\n6 12\n7 13\n8 14\n\
                              9 15\n10 16\n11 12\n11 13\n11 15\n11 16\n12 13\n12 14\n\
                              12 16\n13 14\n13 15\n14 15\n14 16\n15 16\n");
        let graph = Graph::read_gr(gr);
        assert!(graph.is_ok());
        let graph = graph.unwrap();
        let opt_sol = graph.bounded_search_tree();
        assert!(graph.is_vertex_cover(&opt_sol));
        assert_eq!(opt_sol.len(), 10);
    }

    #[test]
    fn bounded_search_tree_intervined_cliques_test() {
        let gr = Cursor::new("p td 12 30\n1 2\n1 3\n1 4\n1 5\n1 9\n2 3\n2 4\n2 6\n2 10\n\
                              3 4\n3 7\n3 11\n4 8\n4 12\n5 6\n5 7\n5 8\n5 9\n6 7\n\
                              6 8\n6 10\n7 8\n7 11\n8 12\n9 10\n9 11\n9 12\n\
                              10 11\n10 12\n11 12\n");
        let graph = Graph::read_gr(gr);
        assert!(graph.is_ok());
        let graph = graph.unwrap();
        let opt_sol = graph.bounded_search_tree();
        assert!(graph.is_vertex_cover(&opt_sol));
        assert_eq!(opt_sol.len(), 9);
    }

    #[test]
    fn search_tree_test() {
        // 5-cycle needs 3 vertices.
        let cycle = Graph::from_edges(5, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
        assert_eq!(cycle.search_tree(2), None);
        let sol = cycle.search_tree(3);
        assert!(sol.is_some());
        let sol = sol.unwrap();
        assert_eq!(sol.len(), 3);
        assert!(cycle.is_vertex_cover(&sol));
        assert_eq!(cycle.search_tree(0), None);
        assert_eq!(Graph::empty(3).search_tree(0), Some(Cover::default()));
    }

    #[test]
    fn search_tree_branch_order_test() {
        // Path 0 - 1 - 2: the first endpoint of (0,1) fails with k = 1, the second succeeds.
        let path = Graph::from_edges(3, vec![(0, 1), (1, 2)]).unwrap();
        assert_eq!(path.search_tree(1), Some(vec![1].into_iter().collect::<Cover>()));
        // With a larger budget the first endpoint is kept.
        assert_eq!(path.search_tree(2), Some(vec![0, 1].into_iter().collect::<Cover>()));
    }

    #[test]
    fn bounded_search_tree_small_graphs_test() {
        assert!(Graph::empty(4).bounded_search_tree().is_empty());
        let single = Graph::from_edges(2, vec![(0, 1)]).unwrap();
        let sol = single.bounded_search_tree();
        assert_eq!(sol.len(), 1);
        assert!(sol.contains(&0) || sol.contains(&1));
        let complete = Graph::random_seeded(6, 1.0, 0).unwrap();
        assert_eq!(complete.bounded_search_tree().len(), 5);
        let star = Graph::from_edges(6, (1..6).map(|leaf| (0, leaf))).unwrap();
        assert_eq!(star.bounded_search_tree(), vec![0].into_iter().collect::<Cover>());
    }

}
