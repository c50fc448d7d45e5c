// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod assign;
pub mod board;
pub mod entity;
pub mod lead;
pub mod phases;
pub mod property;
pub mod seed;
