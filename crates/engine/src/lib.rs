// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Rentboard board service
//!
//! Ties the phase registry to an entity store: every create and move is
//! validated before the store sees it.

mod assign;
mod board;
mod error;
mod kanban;
mod maintenance;
pub mod mock;
mod seed;

pub use assign::AssignmentRun;
pub use board::Board;
pub use error::EngineError;
pub use kanban::{Card, Column, Kanban, UnplacedCard};
pub use seed::{SeedPlan, SeedRun};
