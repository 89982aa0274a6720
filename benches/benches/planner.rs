// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_ribbon::{
    DeviceClass, Dimension, ItemsPerDeviceClass, LayoutEnvironment, LayoutPlanner,
    SectionBoundaries, SectionConfiguration, SectionLayoutKind, WidthSearch,
};

fn bench_width_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("ribbon/width_search");
    let search = WidthSearch::default();

    // Wider containers need more steps before a whole slot count fits.
    for width in [375.0_f64, 1024.0, 1920.0, 3840.0] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| black_box(search.run(black_box(width), 6.0)));
        });
    }

    group.finish();
}

fn bench_plan_and_arrange(c: &mut Criterion) {
    let mut group = c.benchmark_group("ribbon/plan_and_arrange");
    let planner = LayoutPlanner::default();
    let env = LayoutEnvironment::new(Size::new(1920.0, 1080.0)).with_device_class(DeviceClass::Tv);
    let header = SectionBoundaries::header(Dimension::Estimated(44.0));

    let configs = [
        (
            "horizontal",
            SectionConfiguration::new(SectionLayoutKind::horizontal(
                Dimension::Absolute(240.0),
                vec![Dimension::Absolute(420.0), Dimension::FractionalWidth(0.15)],
            )),
        ),
        (
            "vertical",
            SectionConfiguration::new(SectionLayoutKind::vertical(
                3,
                Dimension::Absolute(600.0),
                Dimension::Estimated(320.0),
            )),
        ),
        (
            "wall",
            SectionConfiguration::new(SectionLayoutKind::wall(
                ItemsPerDeviceClass::with_aspect_ratio(0.5625),
            )),
        ),
    ];

    for items in [16_usize, 256, 4_096] {
        group.throughput(Throughput::Elements(items as u64));
        for (name, config) in &configs {
            group.bench_with_input(BenchmarkId::new(*name, items), &items, |b, &items| {
                b.iter(|| {
                    let plan = planner.plan(0, config, &env, header);
                    black_box(plan.arrange(items));
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_width_search, bench_plan_and_arrange);
criterion_main!(benches);
