// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planned sections feeding the coordinator through the layout adapter.

#![cfg(feature = "layout_adapter")]

use kurbo::{Insets, Point, Size};
use understory_ribbon::{
    DeviceClass, Dimension, ItemsPerDeviceClass, LayoutEnvironment, LayoutPlanner,
    SectionBoundaries, SectionConfiguration, SectionFrames, SectionLayoutKind,
};
use understory_ribbon_focus::adapters::layout::StackedSections;
use understory_ribbon_focus::{
    FocusCoordinator, FocusTransition, ItemCoord, ScrollBehavior, SectionCounts,
};

fn home_screen() -> Vec<SectionFrames> {
    let env = LayoutEnvironment::new(Size::new(1920.0, 1080.0)).with_device_class(DeviceClass::Tv);
    let planner = LayoutPlanner::default();
    let header = SectionBoundaries::header(Dimension::Absolute(50.0));

    let hero = SectionConfiguration::new(SectionLayoutKind::single(ItemsPerDeviceClass {
        tv: 1,
        aspect_ratio: 0.25,
        ..ItemsPerDeviceClass::default()
    }));
    let ribbon = SectionConfiguration::new(SectionLayoutKind::horizontal_uniform(
        Dimension::Absolute(200.0),
        Dimension::Absolute(300.0),
    ));
    let empty = SectionConfiguration::default();

    vec![
        planner.plan(0, &hero, &env, SectionBoundaries::NONE).arrange(1),
        planner.plan(1, &ribbon, &env, header).arrange(10),
        planner.plan(2, &empty, &env, header).arrange(0),
        planner.plan(3, &ribbon, &env, header).arrange(8),
        planner.plan(4, &ribbon, &env, header).arrange(12),
    ]
}

#[test]
fn counts_come_from_arranged_sections() {
    let frames = home_screen();
    let list = StackedSections::new(&frames, 30.0);
    assert_eq!(list.section_count(), 5);
    assert_eq!(list.item_count(1), 10);
    assert_eq!(list.item_count(2), 0);
    assert_eq!(list.item_count(4), 12);
}

#[test]
fn skipping_over_an_empty_section() {
    let frames = home_screen();
    let list = StackedSections::new(&frames, 30.0);
    let mut coordinator = FocusCoordinator::new();

    // 4 -> 1 skips; the section above 4 is 3, which has items.
    let skip = FocusTransition::between(ItemCoord::new(4, 5), ItemCoord::new(1, 5));
    assert!(!coordinator.should_allow_transition(skip, &list));
    assert_eq!(coordinator.consume_forced_focus(), Some(ItemCoord::new(3, 7)));

    // 3 -> 1 also skips, but section 2 is empty so the move goes through.
    let over_empty = FocusTransition::between(ItemCoord::new(3, 0), ItemCoord::new(1, 0));
    assert!(coordinator.should_allow_transition(over_empty, &list));
}

#[test]
fn paging_lands_on_the_section_header() {
    let frames = home_screen();
    let list = StackedSections::new(&frames, 30.0).with_content_inset(Insets::new(0.0, 90.0, 0.0, 0.0));
    let mut coordinator = FocusCoordinator::new();
    coordinator.record_transition_completed(FocusTransition::entering(ItemCoord::new(3, 2)));

    let origin = list.section_origin(3).map_or(f64::NAN, |p| p.y);
    let offset =
        coordinator.target_scroll_offset(Point::new(0.0, 0.0), ScrollBehavior::SectionPaging, &list);
    assert_eq!(offset, Point::new(0.0, origin - 90.0));

    // The hero has no header, so its item is used.
    coordinator.record_transition_completed(FocusTransition::entering(ItemCoord::new(0, 0)));
    let offset =
        coordinator.target_scroll_offset(Point::new(5.0, 300.0), ScrollBehavior::SectionPaging, &list);
    assert_eq!(offset, Point::new(5.0, -90.0));
}
