// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration files written by hosts load back into equal values.

#![cfg(feature = "serde")]

use kurbo::Insets;
use understory_ribbon::{
    DeviceClass, Dimension, ItemsPerDeviceClass, SectionConfiguration, SectionLayoutKind,
};

#[test]
fn configuration_survives_json() {
    let config = SectionConfiguration::new(SectionLayoutKind::horizontal(
        Dimension::Absolute(120.0),
        vec![Dimension::Estimated(200.0), Dimension::FractionalWidth(0.3)],
    ))
    .with_section_insets(Insets::new(16.0, 0.0, 16.0, 8.0));

    let json = serde_json::to_string(&config).expect("serialize");
    let back: SectionConfiguration = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, config);
}

#[test]
fn device_table_with_override_survives_json() {
    let config = SectionConfiguration::new(SectionLayoutKind::single(ItemsPerDeviceClass {
        aspect_ratio: 1.5,
        device_class_override: Some(DeviceClass::Tv),
        ..ItemsPerDeviceClass::default()
    }));
    let json = serde_json::to_string(&config).expect("serialize");
    let back: SectionConfiguration = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, config);
    assert_eq!(back.validate(), Ok(()));
}
