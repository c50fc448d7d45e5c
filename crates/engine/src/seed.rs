// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mock data seeding
//!
//! A seed never stops at a failing record: each outcome goes into the
//! report and the batch moves on. Only setup failures (the store cannot be
//! cleared or queried, no property is published) abort the whole run. A
//! plan that can never assign its leads is refused before anything is
//! cleared.

use crate::board::Board;
use crate::error::EngineError;
use crate::mock;
use chrono::{DateTime, Duration, Utc};
use rb_adapters::EntityStore;
use rb_core::{
    Assignment, AssignmentError, BatchReport, Clock, IdGen, Lead, LeadPhase, PhaseStamp,
    PhaseVariant, PipelineKind, Property, PropertyPhase, Tracked, ELIGIBLE_PHASE,
};
use tracing::{info, warn};

const SEED_HISTORY_DAYS: i64 = 14;

/// How much mock data to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    pub leads: usize,
    /// Properties created in the eligible phase
    pub properties: usize,
    /// Extra properties spread over the other property phases
    pub drafts: usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            leads: 30,
            properties: 6,
            drafts: 4,
        }
    }
}

/// Outcome of a seed run
#[derive(Debug)]
pub struct SeedRun {
    pub report: BatchReport<EngineError>,
    pub assignments: Vec<Assignment>,
}

/// Phase of the `i`th draft property, cycling the non-eligible phases
fn draft_phase(i: usize) -> PropertyPhase {
    let others: Vec<PropertyPhase> = PropertyPhase::ALL
        .iter()
        .copied()
        .filter(|phase| *phase != ELIGIBLE_PHASE)
        .collect();
    others[i % others.len()]
}

fn seeded_lead_phase(i: usize) -> LeadPhase {
    let all = LeadPhase::ALL;
    all[i % all.len()]
}

/// A clock stopped at one instant
#[derive(Clone)]
struct FrozenClock(DateTime<Utc>);

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Creation clock and phase entry time of the `i`th seeded record.
///
/// Boards get a spread of days in phase. Creation times stay one second
/// apart in seed order so oldest-first assignment follows the seed index.
fn backdated(now: DateTime<Utc>, i: usize) -> (FrozenClock, DateTime<Utc>) {
    let created_at = now - Duration::days(SEED_HISTORY_DAYS + 1) + Duration::seconds(i as i64);
    let entered_at = now - Duration::days(i as i64 % SEED_HISTORY_DAYS);
    (FrozenClock(created_at), entered_at)
}

impl<S, C, I> Board<S, C, I>
where
    S: EntityStore,
    C: Clock,
    I: IdGen,
{
    /// Replace all leads, properties, and assignments with mock data
    ///
    /// Fails before touching the store when the plan has leads but no
    /// property to assign them to.
    pub async fn seed(&self, plan: SeedPlan) -> Result<SeedRun, EngineError> {
        if plan.leads > 0 && plan.properties == 0 {
            return Err(AssignmentError::NoEligibleProperties.into());
        }

        let cleared = self.store.clear_assignments().await?;
        let leads = self.store.truncate::<Lead>().await?;
        let properties = self.store.truncate::<Property>().await?;
        info!(cleared, leads, properties, "store truncated");

        let mut report = BatchReport::new("seed");
        let now = self.clock.now();

        for i in 0..plan.properties + plan.drafts {
            let phase = match i.checked_sub(plan.properties) {
                Some(draft) => draft_phase(draft),
                None => ELIGIBLE_PHASE,
            };
            let new = mock::property(i).in_phase(phase.key());
            let id = self.id_gen.next(PipelineKind::Property);
            let (created, entered_at) = backdated(now, i);
            let result = match Property::create(id.clone(), new, &self.registry, &created) {
                Ok(property) => self.insert_entered_at(property, entered_at).await,
                Err(e) => Err(e.into()),
            };
            if let Err(e) = &result {
                warn!(id = %id, error = %e, "seed record failed");
            }
            report.record(id, result);
        }

        for i in 0..plan.leads {
            let new = mock::lead(i).in_phase(seeded_lead_phase(i).key());
            let id = self.id_gen.next(PipelineKind::Lead);
            let (created, entered_at) = backdated(now, i);
            let result = match Lead::create(id.clone(), new, &self.registry, &created) {
                Ok(lead) => self.insert_entered_at(lead, entered_at).await,
                Err(e) => Err(e.into()),
            };
            if let Err(e) = &result {
                warn!(id = %id, error = %e, "seed record failed");
            }
            report.record(id, result);
        }

        let assignments = if plan.leads == 0 {
            Vec::new()
        } else {
            let run = self.assign_round_robin().await?;
            report.absorb(run.report);
            run.assignments
        };

        info!(assigned = assignments.len(), "{}", report);
        Ok(SeedRun {
            report,
            assignments,
        })
    }

    async fn insert_entered_at<T: Tracked>(
        &self,
        mut record: T,
        entered_at: DateTime<Utc>,
    ) -> Result<(), EngineError> {
        let phase = record.stamp().phase.clone();
        *record.stamp_mut() = PhaseStamp::new(phase, entered_at);
        self.store.create(&record).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
