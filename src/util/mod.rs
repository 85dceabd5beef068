// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Small helpers shared by the UI and the app loop.

pub mod clock;
pub mod ticker;
