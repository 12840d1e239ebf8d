// SPDX-License-Identifier: GPL-3.0-only

//! Hardware backend abstractions

pub mod camera;
