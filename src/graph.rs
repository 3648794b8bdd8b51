//! Implementation of a simple, undirected graph on a fixed vertex universe, backed by an
//! adjacency matrix. Vertices are never deleted: removing a vertex isolates it.

use bitvec::prelude::*;
use fxhash::FxHashSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::BufRead;
use crate::cust_error::{GraphError, ImportError};

/// A symmetric, irreflexive adjacency matrix together with the statistics computed when the
/// graph was built.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    adj: Vec<BitVec>,
    probability: Option<f64>,
    num_edges: usize,
    max_degree: usize,
    average_degree: f64,
}

// Construction
impl Graph {

    /// Creates a graph on `n` vertices without any edge.
    pub fn empty(n: usize) -> Self {
        Graph {
            adj: vec![bitvec![0; n]; n],
            probability: None,
            num_edges: 0,
            max_degree: 0,
            average_degree: 0.0,
        }
    }

    /// Creates a random graph on `n` vertices where every pair `u < v` is joined independently
    /// with probability `p`.
    pub fn random<R: Rng>(n: usize, p: f64, rng: &mut R) -> Result<Self, GraphError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(GraphError::InvalidProbability(p))
        }
        let mut graph = Graph::empty(n);
        for u in 0..n {
            for v in (u + 1)..n {
                if rng.gen_bool(p) {
                    graph.connect(u, v);
                }
            }
        }
        graph.probability = Some(p);
        graph.compute_statistics();
        Ok(graph)
    }

    /// Same as `Graph::random()` but reproducible through `seed`.
    pub fn random_seeded(n: usize, p: f64, seed: u64) -> Result<Self, GraphError> {
        Graph::random(n, p, &mut StdRng::seed_from_u64(seed))
    }

    /// Creates a graph on `n` vertices from the given edges. Duplicate edges are merged.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Graph::empty(n);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        graph.compute_statistics();
        Ok(graph)
    }

    /// Reads a `.gr` input and creates a `Graph`.
    pub fn read_gr<R: BufRead>(gr: R) -> Result<Self, ImportError> {
        let (lines, _): (Vec<_>, Vec<_>) = gr.lines()
            .partition(|l| {
                if let Ok(line) = l {
                    // ignore empty lines and comment lines
                    !line.starts_with("c ") && !line.is_empty()
                } else {
                    true
                }
            });
        let mut lines = lines.into_iter();
        // p td <n> <m>
        let (n, m) = {
            let line = lines.next().ok_or(ImportError::InputMalformedError)??;
            let mut s = line.split_whitespace();
            if let Some("p") = s.next() {} else { return Err(ImportError::InputMalformedError); }
            if let Some("td") = s.next() {} else { return Err(ImportError::InputMalformedError); }
            let n: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            let m: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            if s.next().is_some() { return Err(ImportError::InputMalformedError); }
            (n, m)
        };
        let mut graph = Graph::empty(n);
        let mut num_lines = 0;
        for line in lines {
            // <src> <trg>, 1-based
            let line = line?;
            let mut s = line.split_whitespace();
            let src = s.next().ok_or(ImportError::InputMalformedError)?.parse::<usize>()?;
            let trg = s.next().ok_or(ImportError::InputMalformedError)?.parse::<usize>()?;
            if s.next().is_some() { return Err(ImportError::InputMalformedError); }
            let src = src.checked_sub(1).ok_or(ImportError::InputMalformedError)?;
            let trg = trg.checked_sub(1).ok_or(ImportError::InputMalformedError)?;
            graph.add_edge(src, trg)?;
            num_lines += 1;
        }
        if num_lines != m { return Err(ImportError::InputMalformedError); }
        graph.compute_statistics();
        Ok(graph)
    }

    fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        let n = self.num_vertices();
        for vertex in [u, v] {
            if vertex >= n {
                return Err(GraphError::VertexOutOfRange { vertex, n })
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop(u))
        }
        self.connect(u, v);
        Ok(())
    }

    fn connect(&mut self, u: usize, v: usize) {
        self.adj[u].set(v, true);
        self.adj[v].set(u, true);
    }

    /// Sets edge count, maximum degree and average degree from the current matrix.
    fn compute_statistics(&mut self) {
        let degrees: Vec<usize> = self.adj.iter().map(|row| row.count_ones()).collect();
        self.num_edges = degrees.iter().sum::<usize>() / 2;
        self.max_degree = degrees.into_iter().max().unwrap_or(0);
        let n = self.num_vertices();
        self.average_degree = if n == 0 {
            0.0
        } else {
            ((2.0 * self.num_edges as f64 / n as f64) * 100.0).round() / 100.0
        };
    }
}

// Static functions
impl Graph {

    /// Returns the size of the vertex universe, isolated vertices included.
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    /// Returns the edge probability this graph was drawn with, or `None` if it was built from
    /// explicit edges.
    pub fn probability(&self) -> Option<f64> {
        self.probability
    }

    /// Returns the cached edge count.
    ///
    /// The value is set at construction and only refreshed by `non_isolated_vertices()`, so it
    /// lags behind `remove_vertex()`.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns the maximum degree at construction time.
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// Returns the average degree at construction time, rounded to two decimals.
    pub fn average_degree(&self) -> f64 {
        self.average_degree
    }

    /// Returns the current degree of `u`.
    pub fn degree(&self, u: usize) -> usize {
        self.adj[u].count_ones()
    }

    /// Checks if the edge `(u, v)` exists.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj[u][v]
    }

    /// Checks if no edge is left.
    pub fn is_edgeless(&self) -> bool {
        self.take_edge().is_none()
    }

    /// Returns an iterator over all edges `(u, v)` with `u < v`, ordered by `u` then `v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, row)| {
                row.iter_ones()
                    .filter(move |v| *v > u)
                    .map(move |v| (u, v))
            })
    }

    /// Returns the first edge in scan order (`u` ascending, then `v > u` ascending).
    /// The scan order is fixed, so the same matrix always yields the same edge.
    pub fn take_edge(&self) -> Option<(usize, usize)> {
        self.adj
            .iter()
            .enumerate()
            .find_map(|(u, row)| row[(u + 1)..].first_one().map(|offset| (u, u + 1 + offset)))
    }

    /// Returns the lowest vertex with exactly one neighbor.
    pub fn take_vertex_of_degree_exactly_1(&self) -> Option<usize> {
        (0..self.num_vertices()).find(|u| self.degree(*u) == 1)
    }

    /// Returns the lowest vertex whose degree is strictly greater than `k`.
    pub fn take_vertex_of_degree_greater_than(&self, k: usize) -> Option<usize> {
        (0..self.num_vertices()).find(|u| self.degree(*u) > k)
    }

    /// Returns the lowest neighbor of `u`.
    pub fn first_neighbor(&self, u: usize) -> Option<usize> {
        self.adj[u].first_one()
    }

    /// Checks if `cover` contains an endpoint of every edge.
    pub fn is_vertex_cover(&self, cover: &FxHashSet<usize>) -> bool {
        self.edges().all(|(u, v)| cover.contains(&u) || cover.contains(&v))
    }

    /// Returns a copy of `self` that can be altered without affecting `self`.
    pub fn modifiable_copy(&self) -> Self {
        self.clone()
    }

    /// Returns a copy of `self` in which `u` is isolated.
    pub fn subgraph(&self, u: usize) -> Self {
        let mut sub = self.modifiable_copy();
        sub.remove_vertex(u);
        sub
    }
}

// Dynamic functions
impl Graph {

    /// Isolates `u` by deleting all incident edges. `u` stays part of the vertex universe.
    pub fn remove_vertex(&mut self, u: usize) {
        let neighbors: Vec<usize> = self.adj[u].iter_ones().collect();
        for v in neighbors {
            self.adj[v].set(u, false);
        }
        self.adj[u].fill(false);
    }

    /// Returns all vertices of degree at least one in ascending order and refreshes the cached
    /// edge count.
    pub fn non_isolated_vertices(&mut self) -> Vec<usize> {
        let mut degree_sum = 0;
        let mut vertices = Vec::new();
        for (u, row) in self.adj.iter().enumerate() {
            let degree = row.count_ones();
            if degree > 0 {
                degree_sum += degree;
                vertices.push(u);
            }
        }
        self.num_edges = degree_sum / 2;
        vertices
    }
}
