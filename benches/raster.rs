use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_console::core::FrameBuffer;
use tui_console::engine::{format_status_line, StatusLine};
use tui_console::input::{InputTracker, RawKeySnapshot};
use tui_console::types::{vk, Attribute, Color, PIXEL_SOLID};

fn bench_lines(c: &mut Criterion) {
    let mut fb = FrameBuffer::new(160, 100);
    let attr = Attribute::fg(Color::Green);

    c.bench_function("draw_line_diagonal", |b| {
        b.iter(|| {
            fb.draw_line(black_box(0), 0, black_box(159), 99, PIXEL_SOLID, attr);
        })
    });

    c.bench_function("draw_line_clipped", |b| {
        b.iter(|| {
            fb.draw_line(black_box(-500), -20, black_box(700), 130, PIXEL_SOLID, attr);
        })
    });
}

fn bench_fill_and_text(c: &mut Criterion) {
    let mut fb = FrameBuffer::new(160, 100);
    let attr = Attribute::new(Color::White, Color::DarkBlue);

    c.bench_function("fill_full_screen", |b| {
        b.iter(|| {
            fb.fill(black_box(0), 0, black_box(160), 100, ' ', attr);
        })
    });

    c.bench_function("draw_text_line", |b| {
        b.iter(|| {
            fb.draw_text(black_box(4), 10, "Score: 000000  Lives: 3  Level: 12", attr);
        })
    });
}

fn bench_frame_overhead(c: &mut Criterion) {
    let mut tracker = InputTracker::new();
    let snaps = [
        RawKeySnapshot::new(),
        RawKeySnapshot::with_down(&[vk::LEFT, vk::SPACE]),
    ];
    let mut i = 0;

    c.bench_function("input_refresh", |b| {
        b.iter(|| {
            i ^= 1;
            tracker.refresh(black_box(&snaps[i]));
        })
    });

    let mut status = StatusLine::new();
    c.bench_function("format_status_line", |b| {
        b.iter(|| {
            format_status_line(&mut status, "Benchmark", black_box(0.016));
        })
    });
}

criterion_group!(benches, bench_lines, bench_fill_and_text, bench_frame_overhead);
criterion_main!(benches);
