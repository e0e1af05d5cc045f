use criterion::{Criterion, criterion_group, criterion_main};
use stackkit::fmt::{Alignment, FormatTemplate, FormatValues, LineFormatter, TagConfig, Transform};
use stackkit::level::Level;
use stackkit::record::LogRecord;
use std::hint::black_box;

fn bench_format_template_render(c: &mut Criterion) {
    let template = FormatTemplate::parse("[{timestamp}] {tag} [{context}] {msg}");
    let values = FormatValues::new()
        .timestamp("2026-01-15T14:30:00.123Z")
        .tag("INFO ")
        .context("MAIN")
        .msg("Application started successfully");

    c.bench_function("FormatTemplate::render", |b| {
        b.iter(|| template.render(black_box(&values)));
    });
}

fn bench_tag_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("TagConfig::format");

    let config = TagConfig::default();
    group.bench_function("default", |b| {
        b.iter(|| config.format(black_box(Level::Info)));
    });

    let config_custom = TagConfig::new()
        .prefix("<<")
        .suffix(">>")
        .transform(Transform::Capitalize)
        .min_width(10)
        .alignment(Alignment::Right);
    group.bench_function("custom", |b| {
        b.iter(|| config_custom.format(black_box(Level::Warn)));
    });

    group.finish();
}

fn bench_line_format(c: &mut Criterion) {
    let formatter = LineFormatter::new();
    let mut group = c.benchmark_group("LineFormatter::format");

    let plain = LogRecord::new(Level::Info, "NET", "connection established");
    group.bench_function("plain", |b| {
        b.iter(|| formatter.format(black_box(&plain)));
    });

    let with_data = LogRecord::new(Level::Warn, "API", "slow response").with_data(
        serde_json::json!({"path": "/users", "ms": 1532, "status": 200}),
    );
    group.bench_function("with_data", |b| {
        b.iter(|| formatter.format(black_box(&with_data)));
    });

    let io = std::io::Error::other("connection reset by peer");
    let with_error = LogRecord::new(Level::Error, "NET", "request failed").with_error(&io);
    group.bench_function("with_error", |b| {
        b.iter(|| formatter.format(black_box(&with_error)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_format_template_render,
    bench_tag_format,
    bench_line_format,
);
criterion_main!(benches);
