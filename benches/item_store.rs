//! Benchmarks for the list operations that run on every key press.
//!
//! Each mutation rewrites the whole list, so encoding cost grows with the
//! list length.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use todo_tui::storage::{decode, encode};
use todo_tui::todo::{reorder, Filter, TodoItem};

const LIST_LEN: usize = 1_000;

fn items(len: usize) -> Vec<TodoItem> {
    (0..len)
        .map(|i| {
            let mut item = TodoItem::new(format!("item {}", i));
            item.completed = i % 3 == 0;
            item
        })
        .collect()
}

fn bench_move_item(c: &mut Criterion) {
    let base = items(LIST_LEN);
    let first = base[0].id.clone();
    let last = base[LIST_LEN - 1].id.clone();
    c.bench_function("move_last_to_first_1000", |b| {
        b.iter_batched(
            || base.clone(),
            |mut list| reorder::move_item(&mut list, black_box(&last), black_box(&first)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_filter(c: &mut Criterion) {
    let list = items(LIST_LEN);
    c.bench_function("filter_active_1000", |b| {
        b.iter(|| Filter::Active.apply(black_box(&list)).len())
    });
}

fn bench_persistence(c: &mut Criterion) {
    let list = items(LIST_LEN);
    c.bench_function("encode_1000", |b| b.iter(|| encode(black_box(&list))));

    let blob = encode(&list).expect("encode benchmark list");
    c.bench_function("decode_1000", |b| b.iter(|| decode(black_box(&blob))));
}

criterion_group!(benches, bench_move_item, bench_filter, bench_persistence);
criterion_main!(benches);
