//! Benchmarks for edit operations.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tinytext::editor::{Buffer, Direction, Editor};

fn bench_typing(c: &mut Criterion) {
    c.bench_function("type_line_of_text", |b| {
        b.iter(|| {
            let mut editor = Editor::new(Buffer::from_text(""));
            for ch in black_box("the quick brown fox jumps over the lazy dog").chars() {
                editor.insert_char(ch).unwrap();
            }
            editor
        });
    });
}

fn bench_split_and_join(c: &mut Criterion) {
    let text = "x".repeat(200);
    c.bench_function("enter_then_backspace", |b| {
        b.iter(|| {
            let mut editor = Editor::new(Buffer::from_text(black_box(&text)));
            for _ in 0..100 {
                editor.move_cursor(Direction::Right).unwrap();
            }
            editor.split_line().unwrap();
            editor.delete_back().unwrap();
            editor
        });
    });
}

fn bench_paste(c: &mut Criterion) {
    let paste = (0..500)
        .map(|i| format!("pasted line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    c.bench_function("paste_500_lines", |b| {
        b.iter(|| {
            let mut editor = Editor::new(Buffer::from_text("before|after"));
            editor.insert_text(black_box(&paste)).unwrap();
            editor
        });
    });
}

criterion_group!(benches, bench_typing, bench_split_and_join, bench_paste);
criterion_main!(benches);
