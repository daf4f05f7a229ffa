//! Benchmarks for fragment navigation and widget models
//!
//! Run with: cargo bench -p showcase-core
//!
//! Baselines for:
//! - Navigator start-up from valid and invalid fragments
//! - Sidebar selection round trips
//! - Transfer filtering and tree flattening

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use showcase_core::catalog::routes;
use showcase_core::widgets::{transfer, tree, Side, TransferItem, TransferState, TreeState};
use showcase_core::{MemoryPort, Navigator, Page};

// ============================================================================
// Navigation Benchmarks
// ============================================================================

fn bench_start(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigator_start");

    for raw in ["#design/color", "#components/nonexistent-id", "", "#settings/profile"] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{raw:?}")), raw, |b, raw| {
            b.iter(|| {
                let mut navigator = Navigator::new(MemoryPort::new(raw));
                black_box(navigator.start())
            })
        });
    }

    group.finish();
}

fn bench_select_every_section(c: &mut Criterion) {
    c.bench_function("select_every_component_section", |b| {
        b.iter_batched(
            || {
                let mut navigator = Navigator::new(MemoryPort::new(&Page::Components.canonical_fragment()));
                navigator.start();
                navigator
            },
            |mut navigator| {
                for section in Page::Components.sections() {
                    black_box(navigator.select_section(section.id).ok());
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_route_table(c: &mut Criterion) {
    c.bench_function("build_route_table", |b| b.iter(|| black_box(routes())));
}

// ============================================================================
// Widget Benchmarks
// ============================================================================

fn bench_transfer_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer_search");

    for size in [6usize, 100, 1000] {
        let items: Vec<TransferItem> = if size == 6 {
            transfer::demo_items()
        } else {
            (0..size)
                .map(|i| TransferItem::new(&i.to_string(), &format!("Exercise {i}")))
                .collect()
        };
        let mut state = TransferState::new(items);
        state.set_search(Side::Source, "9");

        group.bench_with_input(BenchmarkId::from_parameter(size), &state, |b, state| {
            b.iter(|| black_box(state.items(Side::Source).len()))
        });
    }

    group.finish();
}

fn bench_tree_rows(c: &mut Criterion) {
    let mut state = TreeState::new(tree::demo_tree());
    for id in ["1", "2", "5", "8"] {
        state.click(id);
    }
    c.bench_function("tree_visible_rows_expanded", |b| {
        b.iter(|| black_box(state.visible_rows().len()))
    });
}

criterion_group!(navigation_benches, bench_start, bench_select_every_section, bench_route_table,);

criterion_group!(widget_benches, bench_transfer_search, bench_tree_rows,);

criterion_main!(navigation_benches, widget_benches);
