// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the pagination window and the row selection set
// in the fimdash-core crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use fimdash_core::{ListQuery, SelectionPolicy, SelectionSet, compute_window};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Window computation across small, typical and very large page counts.
fn bench_compute_window(c: &mut Criterion) {
    let totals: &[(&str, u32)] = &[("5 pages", 5), ("50 pages", 50), ("100k pages", 100_000)];

    let mut group = c.benchmark_group("compute_window");
    for &(label, total) in totals {
        group.bench_function(label, |b| {
            b.iter(|| {
                for current in [1, total / 2, total] {
                    black_box(compute_window(black_box(current.max(1)), black_box(total)));
                }
            });
        });
    }
    group.finish();
}

/// Select-all over a 100-row page followed by individual toggles, under
/// both selection policies.
fn bench_selection(c: &mut Criterion) {
    let page: Vec<String> = (0..100).map(|i| format!("log-{i:05}")).collect();
    let next_page: Vec<String> = (100..200).map(|i| format!("log-{i:05}")).collect();

    let mut group = c.benchmark_group("selection_set");
    for policy in [SelectionPolicy::Retain, SelectionPolicy::PruneToPage] {
        group.bench_function(format!("{policy:?}"), |b| {
            b.iter(|| {
                let mut set = SelectionSet::new(policy);
                set.toggle_mode();
                set.select_all(black_box(&page));
                for id in page.iter().step_by(3) {
                    set.toggle(id);
                }
                set.observe_page(black_box(&next_page));
                black_box(set.ids());
            });
        });
    }
    group.finish();
}

/// Query-string encoding of a fully populated query.
fn bench_query_params(c: &mut Criterion) {
    let mut query = ListQuery::default();
    query.set_search("wp-content/uploads");
    query.set_filter("category", "Login");
    query.set_filter("user", "admin");
    query.set_filter("ip", "all");
    query.page = 12;

    c.bench_function("list_query_to_params", |b| {
        b.iter(|| black_box(black_box(&query).to_params()));
    });
}

criterion_group!(benches, bench_compute_window, bench_selection, bench_query_params);
criterion_main!(benches);
