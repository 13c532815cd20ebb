//! Single-source shortest paths with lazy deletion.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use super::{Distances, WeightedGraph};

/// Heap entry. Ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// cost first, earliest push first among equal costs.
struct Candidate<N> {
    cost: f64,
    seq: u64,
    node: N,
}

impl<N> PartialEq for Candidate<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Candidate<N> {}

impl<N> PartialOrd for Candidate<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Candidate<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Shortest distance from `start` to every node mentioned in `graph`.
///
/// The table has one entry per node appearing as a key or as a neighbour;
/// unreachable nodes map to `f64::INFINITY`. Nodes absent from the key set
/// have no outgoing edges. Negative weights are not rejected and give
/// unspecified results.
///
/// Superseded heap entries are left in place and skipped when popped.
pub fn dijkstra<N: Eq + Hash + Clone>(graph: &WeightedGraph<N>, start: &N) -> Distances<N> {
    let mut dist = Distances::new();
    for (node, edges) in graph {
        dist.insert(node.clone(), f64::INFINITY);
        for neighbour in edges.keys() {
            dist.insert(neighbour.clone(), f64::INFINITY);
        }
    }
    dist.insert(start.clone(), 0.0);

    let mut seq = 0u64;
    let mut heap = BinaryHeap::new();
    heap.push(Candidate { cost: 0.0, seq, node: start.clone() });

    while let Some(Candidate { cost, node, .. }) = heap.pop() {
        if cost > dist[&node] {
            continue;
        }
        let Some(edges) = graph.get(&node) else {
            continue;
        };
        for (next, weight) in edges {
            let alt = cost + weight;
            if alt < dist[next] {
                dist.insert(next.clone(), alt);
                seq += 1;
                heap.push(Candidate { cost: alt, seq, node: next.clone() });
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;

    fn weighted(edges: &[(&'static str, &[(&'static str, f64)])]) -> WeightedGraph<&'static str> {
        edges
            .iter()
            .map(|(node, out)| (*node, out.iter().copied().collect::<HashMap<_, _>>()))
            .collect()
    }

    #[test]
    fn test_fixture() {
        let graph = weighted(&[
            ("A", &[("B", 1.0), ("C", 4.0)]),
            ("B", &[("C", 2.0), ("D", 5.0)]),
            ("C", &[("D", 1.0)]),
            ("D", &[]),
        ]);
        let dist = dijkstra(&graph, &"A");
        assert_eq!(dist["A"], 0.0);
        assert_eq!(dist["B"], 1.0);
        assert_eq!(dist["C"], 3.0);
        assert_eq!(dist["D"], 4.0);
    }

    #[test]
    fn test_unreachable_is_infinite() {
        let graph = weighted(&[("A", &[("B", 2.0)]), ("B", &[]), ("Z", &[("A", 1.0)])]);
        let dist = dijkstra(&graph, &"A");
        assert_eq!(dist.len(), 3);
        assert!(dist["Z"].is_infinite());
    }

    #[test]
    fn test_neighbour_only_node_is_reported() {
        let graph = weighted(&[("A", &[("X", 2.5)]), ("B", &[("Y", 1.0)])]);
        let dist = dijkstra(&graph, &"A");
        assert_eq!(dist["X"], 2.5);
        assert!(dist["Y"].is_infinite());
        assert!(dist["B"].is_infinite());
    }

    #[test]
    fn test_start_outside_graph() {
        let graph = weighted(&[("A", &[("B", 1.0)])]);
        let dist = dijkstra(&graph, &"Q");
        assert_eq!(dist["Q"], 0.0);
        assert!(dist["A"].is_infinite());
    }

    #[test]
    fn test_stale_entries_skipped() {
        // C is first pushed at 10, then improved to 3 via B.
        let graph = weighted(&[
            ("A", &[("C", 10.0), ("B", 1.0)]),
            ("B", &[("C", 2.0)]),
            ("C", &[("D", 1.0)]),
        ]);
        let dist = dijkstra(&graph, &"A");
        assert_eq!(dist["C"], 3.0);
        assert_eq!(dist["D"], 4.0);
    }

    #[test]
    fn test_zero_weight_edges() {
        let graph = weighted(&[("A", &[("B", 0.0)]), ("B", &[("C", 0.0)])]);
        let dist = dijkstra(&graph, &"A");
        assert_eq!(dist["C"], 0.0);
    }
}
