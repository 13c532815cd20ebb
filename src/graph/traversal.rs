//! Unweighted traversal: breadth-first and depth-first visitation order.

use std::collections::VecDeque;
use std::hash::Hash;

use hashbrown::HashSet;

use super::AdjacencyList;

/// Breadth-first visitation order from `start`.
///
/// Nodes are marked seen when enqueued, so each node enters the queue at most
/// once. Nodes without an entry in `graph` are treated as sinks.
pub fn bfs<N: Eq + Hash + Clone>(graph: &AdjacencyList<N>, start: &N) -> Vec<N> {
    let mut order = Vec::new();
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();

    seen.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(node) = queue.pop_front() {
        for next in graph.get(&node).into_iter().flatten() {
            if seen.insert(next.clone()) {
                queue.push_back(next.clone());
            }
        }
        order.push(node);
    }
    order
}

/// Depth-first visitation order from `start`, iterative.
///
/// Neighbours are pushed in reverse so they pop in listed order, matching a
/// recursive walk. Nodes are marked when popped, so a node can sit on the
/// stack more than once but is recorded only the first time.
pub fn dfs<N: Eq + Hash + Clone>(graph: &AdjacencyList<N>, start: &N) -> Vec<N> {
    let mut order = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![start.clone()];

    while let Some(node) = stack.pop() {
        if !seen.insert(node.clone()) {
            continue;
        }
        for next in graph.get(&node).into_iter().flatten().rev() {
            if !seen.contains(next) {
                stack.push(next.clone());
            }
        }
        order.push(node);
    }
    order
}
