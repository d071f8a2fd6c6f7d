//! Marker relaxation, camera flight and easing benchmarks.

#![allow(missing_docs)]

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use venue_atlas::camera::{Camera, CameraController, CameraTarget};
use venue_atlas::layout::{min_distance_for_viewport, relax};
use venue_atlas::projection::Bounds;
use venue_atlas::util::easing::EasingFunction;
use venue_atlas::venue::{GeoPoint, Region, VenueMedia, VenuePoint};

fn venues(count: usize, seed: u64) -> Vec<Arc<VenuePoint>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let slug = format!("venue-{i}");
            Arc::new(VenuePoint {
                id: slug.clone(),
                title: slug.clone(),
                slug,
                state: None,
                city: None,
                region: Region::Central,
                location: GeoPoint { lat: 0.0, lng: 0.0 },
                position: Vec2::new(
                    rng.random_range(-300.0..300.0),
                    rng.random_range(-200.0..200.0),
                ),
                adjusted_position: None,
                description: None,
                media: VenueMedia::default(),
                about: None,
            })
        })
        .collect()
}

fn relax_benchmark(c: &mut Criterion) {
    let bounds = Bounds::default();
    let mut group = c.benchmark_group("relax");

    for count in [10, 50, 200] {
        let points = venues(count, 7);
        for viewport in [1920.0_f32, 390.0] {
            let min_distance =
                min_distance_for_viewport(48.0, 600.0, viewport, 20.0);
            group.bench_function(format!("{count}_venues_{viewport}px"), |b| {
                b.iter(|| {
                    black_box(relax(
                        black_box(&points),
                        min_distance,
                        &bounds,
                    ))
                });
            });
        }
    }
    group.finish();
}

fn camera_flight_benchmark(c: &mut Criterion) {
    c.bench_function("camera_flight_180_frames", |b| {
        b.iter(|| {
            let mut camera = Camera::default();
            let mut controller = CameraController::default();
            let target =
                CameraTarget::look_at(Vec3::new(10.0, 0.0, 10.0)).with_zoom(0.3);
            controller.set_target(&target, &camera, None);
            for _ in 0..180 {
                let _ = controller.update(1.0 / 60.0, &mut camera, None);
            }
            black_box(camera.eye)
        });
    });
}

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicInOut;
    c.bench_function("cubic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))));
    });
}

criterion_group!(
    benches,
    relax_benchmark,
    camera_flight_benchmark,
    easing_benchmark
);
criterion_main!(benches);
