// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Core standup data model, independent of the GUI.

pub mod entry;
pub mod report;
pub mod roster;
pub mod session;
pub mod timer;
