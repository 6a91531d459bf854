//! Benchmarks for route resolution and page rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use inkpot::config::Config;
use inkpot::routing::{Route, RouteTable};
use inkpot::shell::Page;

fn wide_table(size: usize) -> RouteTable {
    let mut routes: Vec<Route> = (0..size)
        .map(|i| Route::parse(&format!("/section{}/:slug", i), "section/{slug}.md").unwrap())
        .collect();
    routes.push(Route::parse("/notes/*rest", "notes/{rest}.md").unwrap());
    RouteTable::new(routes)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let table = Config::default().route_table().unwrap();
    group.bench_function("default_table", |b| {
        b.iter(|| table.resolve(black_box("/posts/hello-world?ref=home")))
    });

    for size in [10, 100, 1000] {
        let table = wide_table(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("catch_all_after_{}", size), |b| {
            b.iter(|| table.resolve(black_box("/notes/rust/ownership/borrowing")))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for paragraphs in [10, 100, 1000] {
        let mut markdown = String::from("---\ntitle: Bench\ndate: 2024-01-01\n---\n\n# Bench\n\n");
        for i in 0..paragraphs {
            markdown.push_str(&format!(
                "Paragraph {} with *emphasis*, `code` and a [link](/posts/{}).\n\n",
                i, i
            ));
        }

        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_function(format!("markdown_{}", paragraphs), |b| {
            b.iter(|| Page::from_markdown("bench.md", black_box(&markdown)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_render);
criterion_main!(benches);
