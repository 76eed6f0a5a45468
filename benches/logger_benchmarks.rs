//! Criterion benchmarks for preset_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use preset_logger::core::caller::{prettify, shorten};
use preset_logger::prelude::*;
use preset_logger::{file_formatter, standard_formatter};

// ============================================================================
// Caller Formatting Benchmarks
// ============================================================================

fn bench_caller_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("caller_formatting");
    group.throughput(Throughput::Elements(1));

    let frame = CallFrame::new(
        "github.com/acme/billing/invoice::send",
        "/home/build/acme/billing/src/invoice.rs",
        214,
    );

    group.bench_function("shorten", |b| {
        b.iter(|| shorten(black_box(&frame.file)));
    });

    group.bench_function("prettify_colorized", |b| {
        b.iter(|| prettify(black_box(&frame), CallerStyle::Colorized));
    });

    group.bench_function("prettify_plain", |b| {
        b.iter(|| prettify(black_box(&frame), CallerStyle::Plain));
    });

    group.finish();
}

// ============================================================================
// Line Formatting Benchmarks
// ============================================================================

fn bench_line_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_formatting");
    group.throughput(Throughput::Elements(1));

    let entry = LogEntry::new(LogLevel::Error, "payment gateway unreachable".to_string())
        .with_caller(CallFrame::new("billing::invoice::send", "src/invoice.rs", 214));

    let console = standard_formatter();
    group.bench_function("standard", |b| {
        b.iter(|| console.format(black_box(&entry)));
    });

    let file = file_formatter();
    group.bench_function("file", |b| {
        b.iter(|| file.format(black_box(&entry)));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .report_caller(true)
        .formatter(standard_formatter())
        .output(Output::Writer(Box::new(std::io::sink())))
        .build();

    group.bench_function("enabled", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("filtered", |b| {
        b.iter(|| logger.debug(black_box("Debug message")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_caller_formatting,
    bench_line_formatting,
    bench_dispatch
);
criterion_main!(benches);
