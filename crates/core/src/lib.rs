// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rb-core: the pipeline phase model for the rentboard back office
//!
//! This crate provides:
//! - Typed phase enums for the lead and property pipelines
//! - The phase registry: lookups, ordering, and transition validation
//! - Leads, properties, and assignments
//! - Round-robin assignment of leads to published properties
//! - Per-record batch reports
//!
//! Everything here is pure and synchronous; persistence lives in
//! `rb-adapters`.

pub mod clock;
pub mod id;

pub mod assignment;
pub mod batch;
pub mod config;
pub mod entity;
pub mod error;
pub mod phase;
pub mod pipeline;
pub mod registry;

// Re-exports
pub use assignment::{eligible_properties, round_robin, AssignmentError, ELIGIBLE_PHASE};
pub use batch::{BatchReport, RecordOutcome};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{PipelineConfig, PipelineOverrides};
pub use entity::{
    Assignment, Lead, NewLead, NewProperty, PhaseStamp, Property, Record, Tracked,
};
pub use error::{ConfigError, PhaseError};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use phase::{LeadPhase, Phase, PhaseVariant, PipelineKind, PropertyPhase};
pub use pipeline::Pipeline;
pub use registry::PhaseRegistry;
