//! Graph Property-Based Tests
//!
//! Random small graphs are checked against `petgraph` as an independent
//! oracle, and against invariants that must hold for every input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::collections::{HashMap, HashSet};

use hopgraph_engine::{Graph, GraphResult, State, UNREACHABLE};
use petgraph::algo::{connected_components, dijkstra, is_cyclic_directed};
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

type Edges = Vec<(usize, usize)>;

/// Node count plus edge list over `0..n`, self-loops and repeats included.
fn arb_graph() -> impl Strategy<Value = (usize, Edges)> {
    (1usize..9).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..24)))
}

/// A single directed cycle through every node in random order.
fn arb_ring() -> impl Strategy<Value = (usize, Edges)> {
    (1usize..9).prop_flat_map(|n| {
        Just((0..n).collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(move |order| {
                let edges = order
                    .iter()
                    .zip(order.iter().cycle().skip(1))
                    .map(|(&from, &to)| (from, to))
                    .collect();
                (n, edges)
            })
    })
}

/// Raw material for a union of closed walks: each entry is an anchor pick
/// plus the vertices visited before returning to the anchor.
fn arb_cycle_union() -> impl Strategy<Value = Vec<(usize, Vec<usize>)>> {
    (2usize..8).prop_flat_map(|n| {
        prop::collection::vec(
            (any::<usize>(), prop::collection::vec(0..n, 1..n)),
            1..6,
        )
    })
}

/// Chain the walks into one connected, balanced edge set. Every walk starts
/// at a vertex already used, visits distinct vertices, and is dropped if it
/// would repeat an edge. Returns the vertices in first-use order and the
/// edges.
fn cycle_union(walks: &[(usize, Vec<usize>)]) -> (Vec<usize>, Edges) {
    let mut vertices = vec![0usize];
    let mut edges: Edges = Vec::new();

    for (pick, stops) in walks {
        let anchor = vertices.get(pick % vertices.len()).copied().unwrap_or(0);
        let mut walk = vec![anchor];
        for &stop in stops {
            if !walk.contains(&stop) {
                walk.push(stop);
            }
        }
        if walk.len() < 2 {
            continue;
        }
        walk.push(anchor);

        let steps: Edges = walk
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some((*from, *to)),
                _ => None,
            })
            .collect();
        if steps.iter().any(|step| edges.contains(step)) {
            continue;
        }
        for &(_, to) in &steps {
            if !vertices.contains(&to) {
                vertices.push(to);
            }
        }
        edges.extend(steps);
    }
    (vertices, edges)
}

fn build(n: usize, edges: &[(usize, usize)]) -> GraphResult<(Graph<usize>, DiGraph<usize, ()>)> {
    let mut graph = Graph::new();
    let mut oracle = DiGraph::new();
    for node in 0..n {
        graph.add_node(node)?;
        oracle.add_node(node);
    }
    for &(from, to) in edges {
        graph.add_edge(&from, &to)?;
        oracle.update_edge(NodeIndex::new(from), NodeIndex::new(to), ());
    }
    Ok((graph, oracle))
}

fn distinct_edges(edges: &[(usize, usize)]) -> HashSet<(usize, usize)> {
    edges.iter().copied().collect()
}

proptest! {
    /// Property: cycle detection agrees with petgraph
    #[test]
    fn prop_is_dag_matches_oracle((n, edges) in arb_graph()) {
        let (graph, oracle) = build(n, &edges)?;
        prop_assert_eq!(graph.is_dag(), !is_cyclic_directed(&oracle));
    }

    /// Property: topo_sort exists iff acyclic, and every edge climbs in rank
    #[test]
    fn prop_topo_sort_respects_every_edge((n, edges) in arb_graph()) {
        let (graph, _) = build(n, &edges)?;
        let ranking = graph.topo_sort();
        prop_assert_eq!(ranking.is_some(), graph.is_dag());

        if let Some(ranking) = ranking {
            let rank_of: HashMap<usize, u32> = ranking
                .iter()
                .flat_map(|(&rank, members)| members.iter().map(move |&node| (node, rank)))
                .collect();
            prop_assert_eq!(rank_of.len(), n);
            for &(from, to) in &edges {
                prop_assert!(
                    rank_of.get(&from) < rank_of.get(&to),
                    "edge {}->{} violates ranking", from, to
                );
            }
        }
    }

    /// Property: partitions are petgraph's weakly connected components
    #[test]
    fn prop_partitions_match_weak_components((n, edges) in arb_graph()) {
        let (graph, oracle) = build(n, &edges)?;
        let components = connected_components(&oracle);
        prop_assert_eq!(graph.count_partitions(), components);
        prop_assert_eq!(graph.is_connected(), components == 1);
    }

    /// Property: mutually reachable nodes share a partition
    #[test]
    fn prop_mutual_reachability_implies_same_partition((n, edges) in arb_graph()) {
        let (graph, _) = build(n, &edges)?;
        let partitions = graph.partitions();
        let partition_of = |node: usize| partitions.iter().position(|members| members.contains(&node));

        for a in 0..n {
            for b in 0..n {
                if graph.has_path(&a, &b)? && graph.has_path(&b, &a)? {
                    prop_assert_eq!(partition_of(a), partition_of(b));
                }
            }
        }
    }

    /// Property: hop distances match petgraph's unit-cost Dijkstra
    #[test]
    fn prop_distances_match_oracle((n, edges) in arb_graph(), source in 0usize..9) {
        let source = source % n;
        let (graph, oracle) = build(n, &edges)?;
        let expected = dijkstra(&oracle, NodeIndex::new(source), None, |_| 1usize);
        let distances = graph.shortest_distances(&source);

        prop_assert_eq!(distances.get(&source), Some(&0));
        for node in 0..n {
            let want = expected
                .get(&NodeIndex::new(node))
                .and_then(|&hops| i64::try_from(hops).ok())
                .unwrap_or(UNREACHABLE);
            prop_assert_eq!(distances.get(&node), Some(&want), "distance to {}", node);
        }
    }

    /// Property: a route exists iff has_path, and its length is the hop distance
    #[test]
    fn prop_route_length_is_distance((n, edges) in arb_graph(), from in 0usize..9, to in 0usize..9) {
        let (from, to) = (from % n, to % n);
        let (graph, _) = build(n, &edges)?;
        let route = graph.shortest_path(&from, &to)?;
        prop_assert_eq!(route.is_some(), graph.has_path(&from, &to)?);

        if let Some(route) = route {
            let hops = i64::try_from(route.len()).unwrap_or(i64::MAX) - 1;
            let distances = graph.shortest_distances(&from);
            prop_assert_eq!(distances.get(&to), Some(&hops));
            for pair in route.windows(2) {
                if let [step_from, step_to] = pair {
                    prop_assert!(graph.successors(step_from)?.contains(&step_to));
                }
            }
        }
    }

    /// Property: degree distributions account for every node and edge
    #[test]
    fn prop_degree_sums_equal_edge_count((n, edges) in arb_graph()) {
        let (graph, _) = build(n, &edges)?;
        let total = |distribution: &std::collections::BTreeMap<usize, std::collections::BTreeSet<usize>>| {
            distribution.iter().map(|(degree, members)| degree * members.len()).sum::<usize>()
        };
        let count = |distribution: &std::collections::BTreeMap<usize, std::collections::BTreeSet<usize>>| {
            distribution.values().map(|members| members.len()).sum::<usize>()
        };

        prop_assert_eq!(total(&graph.out_degrees()), distinct_edges(&edges).len());
        prop_assert_eq!(total(&graph.in_degrees()), distinct_edges(&edges).len());
        prop_assert_eq!(count(&graph.out_degrees()), n);
        prop_assert_eq!(count(&graph.in_degrees()), n);
    }

    /// Property: a circuit exists iff Eulerian
    #[test]
    fn prop_circuit_exists_iff_eulerian((n, edges) in arb_graph()) {
        let (graph, _) = build(n, &edges)?;
        prop_assert_eq!(graph.eulerian_circuit().is_some(), graph.is_eulerian());
    }

    /// Property: on a ring the circuit is closed and uses each edge once
    #[test]
    fn prop_ring_circuit_uses_every_edge_once((n, edges) in arb_ring()) {
        let (graph, _) = build(n, &edges)?;
        prop_assert!(graph.is_eulerian());

        let circuit = graph.eulerian_circuit().unwrap_or_default();
        prop_assert_eq!(circuit.len(), graph.edge_count() + 1);
        prop_assert_eq!(circuit.first(), circuit.last());

        let walked: Vec<(usize, usize)> = circuit
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some((*from, *to)),
                _ => None,
            })
            .collect();
        let walked_set: HashSet<(usize, usize)> = walked.iter().copied().collect();
        prop_assert_eq!(walked.len(), walked_set.len(), "an edge was used twice");
        prop_assert_eq!(walked_set, distinct_edges(&edges));
    }

    /// Property: on joined cycles the circuit splices every detour in
    #[test]
    fn prop_cycle_union_circuit_uses_every_edge_once(walks in arb_cycle_union()) {
        let (vertices, edges) = cycle_union(&walks);
        let mut graph = Graph::new();
        for &vertex in &vertices {
            graph.add_node(vertex)?;
        }
        for (from, to) in &edges {
            graph.add_edge(from, to)?;
        }
        prop_assert!(graph.is_eulerian());

        let circuit = graph.eulerian_circuit().unwrap_or_default();
        prop_assert_eq!(circuit.len(), edges.len() + 1);
        prop_assert_eq!(circuit.first(), circuit.last());

        let walked: Vec<(usize, usize)> = circuit
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some((*from, *to)),
                _ => None,
            })
            .collect();
        let walked_set: HashSet<(usize, usize)> = walked.iter().copied().collect();
        prop_assert_eq!(walked.len(), walked_set.len(), "an edge was used twice");
        prop_assert_eq!(walked_set, distinct_edges(&edges));
        prop_assert!(graph.check_state(State::Unset));
    }

    /// Property: every query leaves state unset and repeats identically
    #[test]
    fn prop_queries_are_idempotent_and_reset_state((n, edges) in arb_graph()) {
        let (graph, _) = build(n, &edges)?;

        prop_assert_eq!(graph.is_dag(), graph.is_dag());
        prop_assert_eq!(graph.topo_sort(), graph.topo_sort());
        prop_assert_eq!(graph.count_partitions(), graph.count_partitions());
        prop_assert_eq!(graph.shortest_distances(&0), graph.shortest_distances(&0));
        prop_assert_eq!(graph.eulerian_circuit(), graph.eulerian_circuit());
        prop_assert!(graph.check_state(State::Unset));
    }

    /// Property: removing a node leaves no edge mentioning it
    #[test]
    fn prop_remove_node_clears_incident_edges((n, edges) in arb_graph(), victim in 0usize..9) {
        let victim = victim % n;
        let (mut graph, _) = build(n, &edges)?;
        let surviving = distinct_edges(&edges)
            .into_iter()
            .filter(|&(from, to)| from != victim && to != victim)
            .count();

        prop_assert!(graph.remove_node(&victim));
        prop_assert_eq!(graph.size(), n - 1);
        prop_assert_eq!(graph.edge_count(), surviving);
        for node in graph.payloads().copied().collect::<Vec<_>>() {
            prop_assert!(!graph.successors(&node)?.contains(&&victim));
            prop_assert!(!graph.predecessors(&node)?.contains(&&victim));
        }
    }
}
