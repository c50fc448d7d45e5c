// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Maintenance batches over stored entities

use crate::board::Board;
use crate::error::EngineError;
use rb_adapters::{EntityStore, Filter};
use rb_core::{BatchReport, Clock, IdGen, Lead, PhaseStamp, Property, Tracked};
use tracing::{info, warn};

impl<S, C, I> Board<S, C, I>
where
    S: EntityStore,
    C: Clock,
    I: IdGen,
{
    /// Rewrite stored phase labels to phase keys.
    ///
    /// Records already holding a key are left alone and not reported.
    pub async fn normalize_phases(&self) -> Result<BatchReport<EngineError>, EngineError> {
        let mut report = self.normalize::<Lead>().await?;
        report.absorb(self.normalize::<Property>().await?);
        info!("{}", report);
        Ok(report)
    }

    async fn normalize<T: Tracked>(&self) -> Result<BatchReport<EngineError>, EngineError> {
        let mut report = BatchReport::new("normalize");
        let records: Vec<T> = self.store.query(&Filter::all()).await?;

        for record in records {
            let stored = record.stamp().phase.clone();
            let key = match self.registry.resolve(T::KIND, &stored) {
                Ok(phase) if phase.key == stored => continue,
                Ok(phase) => phase.key.clone(),
                Err(e) => {
                    warn!(id = record.id(), phase = %stored, error = %e, "cannot normalize");
                    report.record(record.id(), Err::<(), _>(e.into()));
                    continue;
                }
            };

            let stamp = PhaseStamp::new(key, record.stamp().phase_entered_at);
            let result = self
                .store
                .update_phase::<T>(record.id(), &stored, stamp)
                .await
                .map_err(EngineError::from);
            match &result {
                Ok(updated) => {
                    info!(id = record.id(), from = %stored, to = %updated.stamp().phase, "normalized")
                }
                Err(e) => warn!(id = record.id(), error = %e, "cannot normalize"),
            }
            report.record(record.id(), result);
        }

        Ok(report)
    }
}

#[cfg(test)]
#[path = "maintenance_tests.rs"]
mod tests;
