//! A* point-to-point search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use hashbrown::{HashMap, HashSet};

/// A path found by [`a_star_search`] and its total edge cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<N> {
    pub path: Vec<N>,
    pub cost: f64,
}

/// Open-set entry: smallest f first, then smallest g, then earliest push.
struct Frontier<N> {
    f: f64,
    g: f64,
    seq: u64,
    node: N,
    parent: Option<N>,
}

impl<N> PartialEq for Frontier<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Frontier<N> {}

impl<N> PartialOrd for Frontier<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Frontier<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.total_cmp(&self.f)
            .then_with(|| other.g.total_cmp(&self.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Cheapest route from `start` to `goal`, or `None` if the open set runs dry.
///
/// `neighbors(node)` yields `(neighbour, edge_cost)` pairs. `heuristic(node,
/// goal)` must not overestimate for the result to be optimal; a constant zero
/// makes this Dijkstra. A closed node is reopened only when a strictly
/// cheaper way to reach it turns up.
pub fn a_star_search<N, F, I, H>(start: N, goal: &N, mut neighbors: F, heuristic: H) -> Option<Route<N>>
where
    N: Eq + Hash + Clone,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, f64)>,
    H: Fn(&N, &N) -> f64,
{
    let mut open = BinaryHeap::new();
    let mut came_from: HashMap<N, Option<N>> = HashMap::new();
    let mut g_score: HashMap<N, f64> = HashMap::new();
    let mut closed: HashSet<N> = HashSet::new();
    let mut seq = 0u64;

    g_score.insert(start.clone(), 0.0);
    open.push(Frontier { f: heuristic(&start, goal), g: 0.0, seq, node: start, parent: None });

    while let Some(Frontier { g, node, parent, .. }) = open.pop() {
        if closed.contains(&node) {
            continue;
        }
        came_from.insert(node.clone(), parent);

        if node == *goal {
            return Some(Route { path: reconstruct(&came_from, node), cost: g });
        }
        closed.insert(node.clone());

        for (next, edge_cost) in neighbors(&node) {
            let tentative = g + edge_cost;
            let best = g_score.get(&next).copied().unwrap_or(f64::INFINITY);
            if tentative >= best {
                continue;
            }
            g_score.insert(next.clone(), tentative);
            closed.remove(&next);
            seq += 1;
            open.push(Frontier {
                f: tentative + heuristic(&next, goal),
                g: tentative,
                seq,
                node: next,
                parent: Some(node.clone()),
            });
        }
    }
    None
}

/// Path-only form of [`a_star_search`]: empty when `goal` is unreachable.
pub fn a_star<N, F, I, H>(start: N, goal: &N, neighbors: F, heuristic: H) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, f64)>,
    H: Fn(&N, &N) -> f64,
{
    a_star_search(start, goal, neighbors, heuristic)
        .map(|route| route.path)
        .unwrap_or_default()
}

fn reconstruct<N: Eq + Hash + Clone>(came_from: &HashMap<N, Option<N>>, goal: N) -> Vec<N> {
    let mut path = vec![goal];
    while let Some(Some(parent)) = path.last().and_then(|node| came_from.get(node)) {
        // parent links can only loop under negative weights
        if path.len() > came_from.len() {
            break;
        }
        path.push(parent.clone());
    }
    path.reverse();
    path
}
