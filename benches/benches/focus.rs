// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_ribbon::{
    Dimension, LayoutEnvironment, SectionBoundaries, SectionConfiguration, SectionFrames, plan,
};
use understory_ribbon_focus::adapters::layout::StackedSections;
use understory_ribbon_focus::{FocusCoordinator, FocusTransition, ItemCoord, ScrollBehavior};

fn home_screen(sections: usize) -> Vec<SectionFrames> {
    let env = LayoutEnvironment::new(Size::new(1920.0, 1080.0));
    let config = SectionConfiguration::default();
    let header = SectionBoundaries::header(Dimension::Absolute(48.0));
    (0..sections)
        .map(|section| plan(section, &config, &env, header).arrange(24))
        .collect()
}

fn bench_upward_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ribbon_focus/navigate_up");

    // One full pass from the bottom section to the top, skipping two sections
    // per move so every step is redirected.
    for sections in [8_usize, 64, 512] {
        let frames = home_screen(sections);
        group.bench_with_input(
            BenchmarkId::from_parameter(sections),
            &frames,
            |b, frames| {
                b.iter(|| {
                    let list = StackedSections::new(frames, 24.0);
                    let mut coordinator = FocusCoordinator::new();
                    let mut at = ItemCoord::new(frames.len() - 1, 0);
                    while at.section >= 3 {
                        let skip = FocusTransition::between(at, ItemCoord::new(at.section - 3, 0));
                        if coordinator.should_allow_transition(skip, &list) {
                            break;
                        }
                        let Some(target) = coordinator.consume_forced_focus() else {
                            break;
                        };
                        coordinator.record_transition_completed(FocusTransition::between(at, target));
                        at = target;
                        black_box(coordinator.target_scroll_offset(
                            Point::ZERO,
                            ScrollBehavior::SectionPaging,
                            &list,
                        ));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_upward_navigation);
criterion_main!(benches);
