// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    lead = { "lead", PipelineKind::Lead },
    leads = { "leads", PipelineKind::Lead },
    property_upper = { "Property", PipelineKind::Property },
    properties = { " properties ", PipelineKind::Property },
)]
fn pipeline_kind_parses(input: &str, expected: PipelineKind) {
    assert_eq!(input.parse::<PipelineKind>().unwrap(), expected);
}

#[test]
fn pipeline_kind_rejects_unknown() {
    let err = "tenant".parse::<PipelineKind>().unwrap_err();
    assert_eq!(err, PhaseError::UnknownPipeline("tenant".to_string()));
}

#[parameterized(
    first = { LeadPhase::QualifiedProfile, 0 },
    middle = { LeadPhase::QualificationInProgress, 2 },
    last = { LeadPhase::ContractSigned, 4 },
)]
fn lead_phase_order_follows_declaration(phase: LeadPhase, order: u32) {
    assert_eq!(phase.order(), order);
}

#[test]
fn published_is_third_property_phase() {
    assert_eq!(PropertyPhase::Published.order(), 2);
    assert_eq!(PropertyPhase::Published.key(), "published");
}

#[test]
fn from_key_round_trips_every_variant() {
    for phase in LeadPhase::ALL {
        assert_eq!(LeadPhase::from_key(phase.key()), Some(*phase));
    }
    for phase in PropertyPhase::ALL {
        assert_eq!(PropertyPhase::from_key(phase.key()), Some(*phase));
    }
    assert_eq!(LeadPhase::from_key("published"), None);
}

#[test]
fn serde_name_matches_key() {
    for phase in LeadPhase::ALL {
        let json = serde_json::to_string(phase).unwrap();
        assert_eq!(json, format!("\"{}\"", phase.key()));
    }
}

#[test]
fn to_phase_carries_kind_and_label() {
    let phase = LeadPhase::TenantAccepted.to_phase();
    assert_eq!(phase.kind, PipelineKind::Lead);
    assert_eq!(phase.label, "Inquilino aceptado");
    assert_eq!(phase.to_string(), "Inquilino aceptado");
}
