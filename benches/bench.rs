// Criterion benchmarks for Explore Core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use explore_core::core::filters::matches_filters;
use explore_core::core::haversine_km;
use explore_core::models::{Activity, Coordinates, FilterOptions};
use explore_core::Explorer;

fn create_listing(id: usize, lat: f64, lng: f64) -> Activity {
    let kinds = ["cycling", "climbing", "running", "hiking", "tennis"];
    Activity {
        kind: kinds[id % kinds.len()].to_string(),
        title: format!("Listing {}", id),
        date: format!("2025-07-{:02}", 1 + id % 28),
        time: "18:00".to_string(),
        location: "London".to_string(),
        meetup_location: "Meeting point".to_string(),
        max_participants: ((id % 20) + 2).to_string(),
        gender: "All genders".to_string(),
        coordinates: Some(Coordinates::new(lat + (id as f64) * 0.001, lng)),
        distance_km: Some((id % 100) as f64),
        ..Default::default()
    }
}

fn create_filters() -> FilterOptions {
    let mut filters = FilterOptions::default();
    filters.activity_type.clear();
    filters.toggle_activity_type("Cycling", true);
    filters.toggle_activity_type("Running", true);
    filters.club_only = false;
    filters
}

fn bench_haversine_distance(c: &mut Criterion) {
    let london = Coordinates::new(51.5074, -0.1278);
    let oxford = Coordinates::new(51.7520, -1.2577);
    c.bench_function("haversine_km", |b| {
        b.iter(|| haversine_km(black_box(london), black_box(oxford)))
    });
}

fn bench_matches_filters(c: &mut Criterion) {
    let filters = create_filters();
    let listing = create_listing(0, 51.5074, -0.1278);
    let center = Some(Coordinates::new(51.5074, -0.1278));

    c.bench_function("matches_filters", |b| {
        b.iter(|| matches_filters(black_box(&listing), black_box(&filters), black_box(center)))
    });
}

fn bench_explorer_search(c: &mut Criterion) {
    let filters = create_filters();
    let explorer = Explorer::with_default_limit();
    let center = Some(Coordinates::new(51.5074, -0.1278));

    let mut group = c.benchmark_group("explorer_search");
    for size in [100, 1_000, 10_000] {
        let collection: Vec<Activity> = (0..size)
            .map(|i| create_listing(i, 51.5074, -0.1278))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &collection, |b, col| {
            b.iter(|| explorer.search(black_box(&filters), black_box(center), col))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_matches_filters,
    bench_explorer_search
);
criterion_main!(benches);
