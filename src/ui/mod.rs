// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the standup application.

pub mod author;
pub mod editor;
pub mod form;
pub mod sidebar;
