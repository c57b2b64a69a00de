use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dcs_dtc_editor::{
    compile_profile, registry_for, Airframe, BuildContext, Coordinate, DelayPlan, DtcProfile,
    NavPoint,
};
use std::hint::black_box;

fn build_synthetic_profile(point_count: usize) -> DtcProfile {
    let mut profile = DtcProfile::new(Airframe::Viper, 1);

    let route = profile.route_mut("Primary").expect("Primary existiert");
    for index in 0..point_count {
        let lat = 40.0 + (index % 100) as f64 * 0.01;
        let lon = 41.0 + (index / 100) as f64 * 0.01;
        route.push(
            NavPoint::new(format!("WP{}", index + 1), Coordinate::new(lat, lon))
                .with_elevation(500 + index as i32),
        );
    }

    for channel in 1..=20 {
        profile.comm1.set_preset(channel, Some(225.0 + channel as f64));
    }
    for slot in 0..6 {
        profile.cm_programs[slot].chaff = 10;
        profile.cm_programs[slot].flare = 10;
    }

    profile
}

fn bench_compile_profile(c: &mut Criterion) {
    let registry = registry_for(Airframe::Viper);
    let delays = DelayPlan::for_airframe(Airframe::Viper, 1.0);

    let mut group = c.benchmark_group("compile_profile");
    for &point_count in &[10usize, 100usize, 600usize] {
        let profile = build_synthetic_profile(point_count);

        group.bench_with_input(
            BenchmarkId::from_parameter(point_count),
            &profile,
            |b, profile| {
                b.iter(|| {
                    let ctx = BuildContext::new(&registry, delays);
                    let script =
                        compile_profile(black_box(profile), &ctx).expect("kompilierbar");
                    black_box(script.to_wire_string().len())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_compile_profile);
criterion_main!(benches);
