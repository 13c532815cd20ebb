//! One entry point per family: parse, resolve, extract, execute.

use hashbrown::HashMap;
use serde_json::Value as Json;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::graph::{self, AdjacencyList, Heuristic, WeightedGraph};
use crate::model::{NodeKey, Value};
use crate::search::{self, sentinel};
use crate::sort;
use crate::text;
use crate::{Error, Result};

use super::response::{GraphResponse, SearchResponse, SortResponse, StringResponse};
use super::{Fields, GraphAlgorithm, SearchAlgorithm, SortAlgorithm, StringAlgorithm};

// ============================================================================
// Search
// ============================================================================

/// `POST /search/{name}` with `{array, target}`.
pub fn handle_search(name: &str, body: &[u8]) -> Result<SearchResponse> {
    let fields = Fields::parse(body)?;
    let algorithm = SearchAlgorithm::resolve(name)?;
    fields.require(&["array", "target"])?;
    let array: Vec<Value> = fields.get("array")?;
    let target: Value = fields.get("target")?;

    let sorted_used = algorithm.requires_sorted();
    let items = if sorted_used { sort::merge_sort(&array) } else { array };
    debug!(%algorithm, len = items.len(), sorted_used, "search");

    let found = match algorithm {
        SearchAlgorithm::Linear => search::linear_search(&items, &target),
        SearchAlgorithm::Binary => search::binary_search(&items, &target),
        SearchAlgorithm::Jump => search::jump_search(&items, &target),
        SearchAlgorithm::Interpolation => {
            require_numeric(&items, &target)?;
            search::interpolation_search(&items, &target)
        }
        SearchAlgorithm::Exponential => search::exponential_search(&items, &target),
        SearchAlgorithm::Fibonacci => search::fibonacci_search(&items, &target),
    };

    let index = sentinel(found);
    Ok(SearchResponse {
        algorithm: algorithm.name(),
        sorted_used,
        array_used: sorted_used.then_some(items),
        index,
        found: found.is_some(),
    })
}

/// Interpolation needs arithmetic, so every value must be a number.
fn require_numeric(items: &[Value], target: &Value) -> Result<()> {
    if let Some(bad) = items.iter().find(|item| !item.is_numeric()) {
        return Err(Error::InvalidField {
            field: "array",
            message: format!("interpolation search needs numeric values, got {}", bad.type_name()),
        });
    }
    if !target.is_numeric() {
        return Err(Error::InvalidField {
            field: "target",
            message: format!("interpolation search needs a number, got {}", target.type_name()),
        });
    }
    Ok(())
}

// ============================================================================
// Sort
// ============================================================================

/// `POST /sort/{name}` with `{array}`.
pub fn handle_sort(name: &str, body: &[u8]) -> Result<SortResponse> {
    let fields = Fields::parse(body)?;
    let algorithm = SortAlgorithm::resolve(name)?;
    fields.require(&["array"])?;
    let array: Vec<Value> = fields.get("array")?;
    debug!(%algorithm, len = array.len(), "sort");

    let sorted = match algorithm {
        SortAlgorithm::Bubble => sort::bubble_sort(&array),
        SortAlgorithm::Selection => sort::selection_sort(&array),
        SortAlgorithm::Insertion => sort::insertion_sort(&array),
        SortAlgorithm::Merge => sort::merge_sort(&array),
        SortAlgorithm::Quick => sort::quick_sort(&array),
        SortAlgorithm::Heap => sort::heap_sort(&array),
    };

    Ok(SortResponse { algorithm: algorithm.name(), sorted })
}

// ============================================================================
// Graph
// ============================================================================

/// `POST /graph/{name}`.
///
/// - `bfs` / `dfs` / `dijkstra`: `{graph, start}`
/// - `astar`: `{start, goal, neighbors, heuristic?}` where `neighbors` maps a
///   node to `[[neighbour, cost], ...]`
pub fn handle_graph(name: &str, body: &[u8]) -> Result<GraphResponse> {
    let fields = Fields::parse(body)?;
    let algorithm = GraphAlgorithm::resolve(name)?;

    match algorithm {
        GraphAlgorithm::Bfs | GraphAlgorithm::Dfs => {
            fields.require(&["graph", "start"])?;
            let adjacency: AdjacencyList<NodeKey> = fields.get("graph")?;
            let start: NodeKey = fields.get("start")?;
            debug!(%algorithm, nodes = adjacency.len(), %start, "traversal");

            let result = if algorithm == GraphAlgorithm::Bfs {
                graph::bfs(&adjacency, &start)
            } else {
                graph::dfs(&adjacency, &start)
            };
            Ok(GraphResponse::Traversal { algorithm: algorithm.name(), result })
        }
        GraphAlgorithm::Dijkstra => {
            fields.require(&["graph", "start"])?;
            let weighted: WeightedGraph<NodeKey> = fields.get("graph")?;
            let start: NodeKey = fields.get("start")?;
            debug!(%algorithm, nodes = weighted.len(), %start, "shortest paths");

            let distances = graph::dijkstra(&weighted, &start)
                .into_iter()
                .map(|(node, cost)| (node.to_string(), cost.is_finite().then_some(cost)))
                .collect();
            Ok(GraphResponse::Distances { algorithm: algorithm.name(), distances })
        }
        GraphAlgorithm::AStar => {
            fields.require(&["start", "goal", "neighbors"])?;
            let start: NodeKey = fields.get("start")?;
            let goal: NodeKey = fields.get("goal")?;
            let neighbors: HashMap<NodeKey, Vec<(NodeKey, f64)>> = fields.get("neighbors")?;
            let requested: Option<Json> = fields.get_opt("heuristic")?;
            let heuristic = match &requested {
                None => Heuristic::Zero,
                Some(Json::String(name)) => Heuristic::from_name(Some(name.as_str())),
                Some(_) => Heuristic::Manhattan,
            };
            debug!(%algorithm, %start, %goal, heuristic = heuristic.name(), "path search");

            let route = graph::a_star_search(
                start,
                &goal,
                |node: &NodeKey| neighbors.get(node).into_iter().flatten().cloned(),
                |node, goal| heuristic.estimate(node, goal),
            );
            let (path, cost) = match route {
                Some(route) => (route.path, Some(route.cost)),
                None => (Vec::new(), None),
            };
            Ok(GraphResponse::Path { algorithm: algorithm.name(), heuristic: heuristic.name(), path, cost })
        }
    }
}

// ============================================================================
// String
// ============================================================================

/// `POST /string/{name}` with `{text, pattern}`.
pub fn handle_string(name: &str, body: &[u8], config: &ServiceConfig) -> Result<StringResponse> {
    let fields = Fields::parse(body)?;
    let algorithm = StringAlgorithm::resolve(name)?;
    fields.require(&["text", "pattern"])?;
    let text_in: String = fields.get("text")?;
    let pattern: String = fields.get("pattern")?;
    debug!(%algorithm, text_len = text_in.len(), pattern_len = pattern.len(), "string match");

    let found = match algorithm {
        StringAlgorithm::Naive => text::naive_search(&text_in, &pattern),
        StringAlgorithm::Kmp => text::kmp_search(&text_in, &pattern),
        StringAlgorithm::RabinKarp => config.rabin_karp.find(&text_in, &pattern),
    };

    Ok(StringResponse { algorithm: algorithm.name(), index: sentinel(found), found: found.is_some() })
}
