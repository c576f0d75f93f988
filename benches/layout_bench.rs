// Benchmark for the event layout engine
// Measures week-strip and month-grid layout over growing event counts

use chrono::{Duration, NaiveDate, Weekday};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use zen_calendar_layout::models::event::CalendarEvent;
use zen_calendar_layout::models::layout::VisibleWindow;
use zen_calendar_layout::services::layout::LayoutEngine;

/// Deterministic synthetic workload: all-day events of varying length
/// scattered across the weeks around June 2024.
fn synthetic_events(count: usize) -> Vec<CalendarEvent> {
    let base = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    (0..count)
        .map(|i| {
            let start = base + Duration::days((i % 11) as i64 - 2);
            let end = start + Duration::days((i % 4) as i64 + 1);
            CalendarEvent::all_day(format!("event-{i}"), start, Some(end))
        })
        .collect()
}

fn bench_week_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("week_layout");
    let engine = LayoutEngine::default();
    let window = VisibleWindow::week(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());

    for count in [10, 100, 1000].iter() {
        let events = synthetic_events(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| engine.layout(black_box(&events), black_box(&window)));
        });
    }

    group.finish();
}

fn bench_month_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_layout");
    let engine = LayoutEngine::default();
    let window = VisibleWindow::month_grid(2024, 6, Weekday::Mon).unwrap();

    for count in [10, 100, 1000].iter() {
        let events = synthetic_events(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| engine.layout_month(black_box(&events), black_box(&window)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_week_layout, bench_month_layout);
criterion_main!(benches);
