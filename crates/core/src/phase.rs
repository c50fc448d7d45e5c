// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline kinds and phase definitions
//!
//! Each pipeline kind has one enum whose variants are the phases of that
//! pipeline, in board order. Code names phases through these variants;
//! the string keys only appear at storage and input boundaries.

use crate::error::PhaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The entity kind a pipeline tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineKind {
    Lead,
    Property,
}

impl PipelineKind {
    pub const ALL: [PipelineKind; 2] = [PipelineKind::Lead, PipelineKind::Property];

    pub fn name(self) -> &'static str {
        match self {
            PipelineKind::Lead => "lead",
            PipelineKind::Property => "property",
        }
    }
}

impl fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PipelineKind {
    type Err = PhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lead" | "leads" => Ok(PipelineKind::Lead),
            "property" | "properties" => Ok(PipelineKind::Property),
            _ => Err(PhaseError::UnknownPipeline(s.to_string())),
        }
    }
}

/// A named stage in a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Stable identifier, stored on entities
    pub key: String,
    /// Human-readable label shown on the board
    pub label: String,
    /// Zero-based rank within the pipeline
    pub order: u32,
    pub kind: PipelineKind,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A typed phase of one pipeline kind.
///
/// `ALL` lists the variants in board order; a variant's position in `ALL`
/// is its order.
pub trait PhaseVariant: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    const KIND: PipelineKind;
    const ALL: &'static [Self];

    fn key(self) -> &'static str;
    fn default_label(self) -> &'static str;

    fn order(self) -> u32 {
        Self::ALL
            .iter()
            .position(|p| *p == self)
            .map_or(0, |i| i as u32)
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.key() == key)
    }

    fn to_phase(self) -> Phase {
        Phase {
            key: self.key().to_string(),
            label: self.default_label().to_string(),
            order: self.order(),
            kind: Self::KIND,
        }
    }
}

/// Phases of the lead (prospective tenant) pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadPhase {
    QualifiedProfile,
    VisitScheduled,
    QualificationInProgress,
    TenantAccepted,
    ContractSigned,
}

impl PhaseVariant for LeadPhase {
    const KIND: PipelineKind = PipelineKind::Lead;
    const ALL: &'static [Self] = &[
        LeadPhase::QualifiedProfile,
        LeadPhase::VisitScheduled,
        LeadPhase::QualificationInProgress,
        LeadPhase::TenantAccepted,
        LeadPhase::ContractSigned,
    ];

    fn key(self) -> &'static str {
        match self {
            LeadPhase::QualifiedProfile => "qualified_profile",
            LeadPhase::VisitScheduled => "visit_scheduled",
            LeadPhase::QualificationInProgress => "qualification_in_progress",
            LeadPhase::TenantAccepted => "tenant_accepted",
            LeadPhase::ContractSigned => "contract_signed",
        }
    }

    fn default_label(self) -> &'static str {
        match self {
            LeadPhase::QualifiedProfile => "Perfil cualificado",
            LeadPhase::VisitScheduled => "Visita programada",
            LeadPhase::QualificationInProgress => "Calificación en curso",
            LeadPhase::TenantAccepted => "Inquilino aceptado",
            LeadPhase::ContractSigned => "Contrato firmado",
        }
    }
}

/// Phases of the property (rental unit) pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyPhase {
    Acquisition,
    Documentation,
    /// Listed and open to leads; the only phase eligible for assignment
    Published,
    Reserved,
    Rented,
}

impl PhaseVariant for PropertyPhase {
    const KIND: PipelineKind = PipelineKind::Property;
    const ALL: &'static [Self] = &[
        PropertyPhase::Acquisition,
        PropertyPhase::Documentation,
        PropertyPhase::Published,
        PropertyPhase::Reserved,
        PropertyPhase::Rented,
    ];

    fn key(self) -> &'static str {
        match self {
            PropertyPhase::Acquisition => "acquisition",
            PropertyPhase::Documentation => "documentation",
            PropertyPhase::Published => "published",
            PropertyPhase::Reserved => "reserved",
            PropertyPhase::Rented => "rented",
        }
    }

    fn default_label(self) -> &'static str {
        match self {
            PropertyPhase::Acquisition => "Captación",
            PropertyPhase::Documentation => "Documentación",
            PropertyPhase::Published => "Publicada",
            PropertyPhase::Reserved => "Reservada",
            PropertyPhase::Rented => "Alquilada",
        }
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
