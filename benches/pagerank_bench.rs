use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pagerank_core::{generate_edges, render_edge_list, GeneratorConfig, GraphBuilder, PageRankOptions};

fn random_edge_list(node_count: u32, edge_count: usize) -> String {
    let config = GeneratorConfig {
        node_count,
        edge_count,
        seed: Some(42),
        ..GeneratorConfig::default()
    };
    render_edge_list(&generate_edges(&config).expect("valid generator config"))
}

fn bench_pagerank(c: &mut Criterion) {
    let options = PageRankOptions::default()
        .min_weight_diff(0.0)
        .max_iterations(20)
        .verbose(false);

    let mut group = c.benchmark_group("pagerank");
    for &(nodes, edges) in &[(100u32, 130usize), (1_000, 5_000), (10_000, 50_000)] {
        let graph = GraphBuilder::from_text(&random_edge_list(nodes, edges))
            .expect("generated edge list parses")
            .build();

        group.bench_with_input(BenchmarkId::from_parameter(edges), &graph, |b, graph| {
            b.iter(|| {
                let mut graph = graph.clone();
                let ranking = graph.pagerank(black_box(&options)).expect("non-empty graph");
                black_box(ranking.iterations)
            })
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let text = random_edge_list(1_000, 5_000);
    c.bench_function("build_graph", |b| {
        b.iter(|| GraphBuilder::from_text(black_box(&text)).expect("parses").build())
    });
}

criterion_group!(benches, bench_pagerank, bench_build);
criterion_main!(benches);
