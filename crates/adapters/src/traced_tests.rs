// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::store::FakeEntityStore;
use rb_core::{Clock, FakeClock, Lead, NewLead, PhaseRegistry};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a test with captured tracing output
fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::default();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}

fn lead(id: &str) -> Lead {
    Lead::create(
        id,
        NewLead::new("Irene", "irene@example.com"),
        &PhaseRegistry::builtin(),
        &FakeClock::new(),
    )
    .unwrap()
}

#[test]
fn traced_create_logs_span_and_outcome() {
    let fake = FakeEntityStore::new();
    let traced = TracedEntityStore::new(fake.clone());

    let (logs, result) = with_tracing(|| async move { traced.create(&lead("lead-1")).await });

    assert!(result.is_ok());
    assert_eq!(fake.count::<Lead>(), 1);
    assert!(logs.contains("store.create"), "logs: {}", logs);
    assert!(logs.contains("lead-1"), "logs: {}", logs);
    assert!(logs.contains("elapsed_ms"), "logs: {}", logs);
}

#[test]
fn traced_stale_update_is_a_warning() {
    let fake = FakeEntityStore::new();
    fake.insert_raw(&lead("lead-1"));
    let traced = TracedEntityStore::new(fake);
    let stamp = PhaseStamp::new("tenant_accepted", FakeClock::new().now());

    let (logs, result) = with_tracing(|| async move {
        traced
            .update_phase::<Lead>("lead-1", "contract_signed", stamp)
            .await
    });

    assert!(matches!(result, Err(StoreError::StaleEntity { .. })));
    assert!(logs.contains("WARN"), "logs: {}", logs);
    assert!(logs.contains("rejected"), "logs: {}", logs);
}

#[test]
fn traced_failure_is_an_error() {
    let fake = FakeEntityStore::new();
    fake.fail_writes_for("lead-1");
    let traced = TracedEntityStore::new(fake);

    let (logs, result) = with_tracing(|| async move { traced.create(&lead("lead-1")).await });

    assert!(matches!(result, Err(StoreError::Backend(_))));
    assert!(logs.contains("ERROR"), "logs: {}", logs);
    assert!(logs.contains("injected failure"), "logs: {}", logs);
}

#[tokio::test]
async fn traced_passes_results_through() {
    let fake = FakeEntityStore::new();
    let traced = TracedEntityStore::new(fake);
    traced.create(&lead("lead-1")).await.unwrap();

    let found: Option<Lead> = traced.get("lead-1").await.unwrap();
    assert!(found.is_some());
    let all: Vec<Lead> = traced.query(&Filter::all()).await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(traced.delete::<Lead>("lead-1").await.unwrap());
    assert!(traced.inner().calls().len() >= 2);
}
