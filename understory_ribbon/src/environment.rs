// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Class of device the list is running on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceClass {
    /// Handset-sized screens.
    #[default]
    Phone,
    /// Tablet-sized screens.
    Tablet,
    /// Television screens driven by a remote.
    Tv,
}

/// Interface orientation of the device.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Taller than wide.
    #[default]
    Portrait,
    /// Wider than tall.
    Landscape,
}

impl Orientation {
    /// Derives an orientation from a container size.
    ///
    /// Square containers count as portrait.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        if size.width > size.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// Everything about the running context the planner needs.
///
/// Hosts build a fresh environment whenever the container is resized or the
/// device rotates and re-plan the affected sections; nothing here is observed
/// globally.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutEnvironment {
    /// Size of the scrollable container the sections are laid out in.
    pub container_size: Size,
    /// Device class, or `None` when it could not be determined.
    pub device_class: Option<DeviceClass>,
    /// Orientation, or `None` when it could not be determined.
    pub orientation: Option<Orientation>,
}

impl LayoutEnvironment {
    /// Creates an environment with an undetermined device class and orientation.
    #[must_use]
    pub fn new(container_size: Size) -> Self {
        Self {
            container_size,
            device_class: None,
            orientation: None,
        }
    }

    /// Sets the device class.
    #[must_use]
    pub fn with_device_class(mut self, device_class: DeviceClass) -> Self {
        self.device_class = Some(device_class);
        self
    }

    /// Sets the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Device class, falling back to [`DeviceClass::Phone`].
    #[must_use]
    pub fn resolved_device_class(&self) -> DeviceClass {
        self.device_class.unwrap_or_default()
    }

    /// Orientation, falling back to [`Orientation::Portrait`].
    #[must_use]
    pub fn resolved_orientation(&self) -> Orientation {
        self.orientation.unwrap_or_default()
    }
}
