// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for rosters and report delivery.

pub mod export;
pub mod roster_store;
pub mod serialization;
pub mod webhook;
