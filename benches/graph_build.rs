//! Benchmarks for graph construction
//!
//! Builds graphs from synthetic resolved trees of increasing size to keep
//! the traversal and edge bookkeeping fast on large classpaths.

use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use depscope::builder::GraphBuilder;
use depscope::parser::{ComponentIndex, ResolvedComponent};

/// Create a synthetic resolution tree with the specified number of nodes
fn create_resolution_tree(
    total_nodes: usize,
    max_depth: usize,
    children_per_node: usize,
) -> ResolvedComponent {
    let mut root = ResolvedComponent {
        id: ":app".to_string(),
        dependencies: Vec::new(),
    };

    let mut node_count = 1;

    fn add_children(
        parent: &mut ResolvedComponent,
        node_count: &mut usize,
        total_nodes: usize,
        current_depth: usize,
        max_depth: usize,
        children_per_node: usize,
    ) {
        if *node_count >= total_nodes || current_depth >= max_depth {
            return;
        }

        for i in 0..children_per_node {
            if *node_count >= total_nodes {
                break;
            }

            let mut child = ResolvedComponent {
                id: format!("org.bench:dep-{}-{}-{}:1.0.0", current_depth, i, *node_count),
                dependencies: Vec::new(),
            };
            *node_count += 1;

            add_children(
                &mut child,
                node_count,
                total_nodes,
                current_depth + 1,
                max_depth,
                children_per_node,
            );

            parent.dependencies.push(child);
        }
    }

    add_children(&mut root, &mut node_count, total_nodes, 1, max_depth, children_per_node);
    root
}

/// Benchmark graph construction from resolution trees
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    let index = ComponentIndex::default();

    for size in [100, 500, 1000, 2000, 5000].iter() {
        let tree = create_resolution_tree(*size, 10, 5);

        group.bench_with_input(BenchmarkId::new("nodes", size), size, |b, _| {
            b.iter(|| {
                let graph = GraphBuilder::new(&tree, &index, BTreeSet::new())
                    .build()
                    .unwrap();
                black_box(graph)
            });
        });
    }

    group.finish();
}

/// Benchmark graph reversal
fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_reverse");
    let index = ComponentIndex::default();

    for size in [500, 1000, 2000].iter() {
        let tree = create_resolution_tree(*size, 10, 5);
        let graph = GraphBuilder::new(&tree, &index, BTreeSet::new())
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("nodes", size), &graph, |b, graph| {
            b.iter(|| black_box(graph.reverse()));
        });
    }

    group.finish();
}

/// Benchmark DOT serialization
fn bench_to_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_to_dot");
    let index = ComponentIndex::default();

    for size in [500, 1000, 2000].iter() {
        let tree = create_resolution_tree(*size, 10, 5);
        let graph = GraphBuilder::new(&tree, &index, BTreeSet::new())
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("nodes", size), &graph, |b, graph| {
            b.iter(|| black_box(graph.to_dot()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_reverse, bench_to_dot);
criterion_main!(benches);
