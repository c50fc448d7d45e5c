// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lead-to-property assignment

use crate::board::Board;
use crate::error::EngineError;
use rb_adapters::{EntityStore, Filter};
use rb_core::{
    eligible_properties, round_robin, Assignment, BatchReport, Clock, IdGen, Lead, Property,
};
use std::collections::HashSet;
use tracing::{info, warn};

/// Result of a round-robin assignment pass
#[derive(Debug)]
pub struct AssignmentRun {
    /// Assignments that were persisted
    pub assignments: Vec<Assignment>,
    pub report: BatchReport<EngineError>,
}

impl<S, C, I> Board<S, C, I>
where
    S: EntityStore,
    C: Clock,
    I: IdGen,
{
    /// Assign every unassigned lead to a published property, round robin.
    ///
    /// Leads and properties are both taken oldest first. Fails before
    /// writing anything when no property is published.
    pub async fn assign_round_robin(&self) -> Result<AssignmentRun, EngineError> {
        let assigned: HashSet<String> = self
            .store
            .assignments()
            .await?
            .into_iter()
            .map(|a| a.lead_id)
            .collect();

        let mut leads: Vec<Lead> = self.store.query(&Filter::all()).await?;
        leads.retain(|lead| !assigned.contains(&lead.id));
        leads.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));

        let mut properties: Vec<Property> = self.store.query(&Filter::all()).await?;
        properties.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        let eligible = eligible_properties(&self.registry, &properties);
        let pairs = round_robin(&leads, &eligible)?;

        let now = self.clock.now();
        let mut run = AssignmentRun {
            assignments: Vec::new(),
            report: BatchReport::new("assign"),
        };
        for (lead, property) in pairs {
            let assignment = Assignment::new(&lead.id, &property.id, now);
            let result = self.store.assign(&assignment).await;
            match &result {
                Ok(()) => run.assignments.push(assignment),
                Err(e) => warn!(lead = %lead.id, property = %property.id, error = %e, "assignment failed"),
            }
            run.report.record(lead.id.as_str(), result.map_err(EngineError::from));
        }

        info!(eligible = eligible.len(), "{}", run.report);
        Ok(run)
    }

    /// Assign a lead to a specific property
    pub async fn assign(&self, lead_id: &str, property_id: &str) -> Result<Assignment, EngineError> {
        let lead: Lead = self.get(lead_id).await?;
        let property: Property = self.get(property_id).await?;
        let assignment = Assignment::new(lead.id, property.id, self.clock.now());
        self.store.assign(&assignment).await?;
        info!(lead = lead_id, property = property_id, "assigned");
        Ok(assignment)
    }

    /// Remove an assignment; returns whether it existed
    pub async fn unassign(&self, lead_id: &str, property_id: &str) -> Result<bool, EngineError> {
        let removed = self.store.unassign(lead_id, property_id).await?;
        if removed {
            info!(lead = lead_id, property = property_id, "unassigned");
        }
        Ok(removed)
    }

    pub async fn assignments(&self) -> Result<Vec<Assignment>, EngineError> {
        Ok(self.store.assignments().await?)
    }
}

#[cfg(test)]
#[path = "assign_tests.rs"]
mod tests;
