// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Round-robin assignment of leads to properties

use crate::entity::{Property, Tracked};
use crate::phase::{PhaseVariant, PropertyPhase};
use crate::registry::PhaseRegistry;
use thiserror::Error;

/// The phase a property must be in to receive leads
pub const ELIGIBLE_PHASE: PropertyPhase = PropertyPhase::Published;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    #[error("no eligible properties: none in phase '{}'", ELIGIBLE_PHASE.key())]
    NoEligibleProperties,
}

/// Pair each lead with a property, cycling through the properties.
///
/// The lead at position `i` goes to the property at position `i mod M`.
/// Fails without pairing anything when there are no properties.
pub fn round_robin<'a, L, P>(
    leads: &'a [L],
    properties: &'a [P],
) -> Result<Vec<(&'a L, &'a P)>, AssignmentError> {
    if properties.is_empty() {
        return Err(AssignmentError::NoEligibleProperties);
    }
    Ok(leads.iter().zip(properties.iter().cycle()).collect())
}

/// Properties currently open to assignment, in input order.
///
/// Stored phases are resolved through the registry so rows still holding
/// a display label count too.
pub fn eligible_properties<'a>(
    registry: &PhaseRegistry,
    properties: &'a [Property],
) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|p| {
            registry
                .resolve(Property::KIND, &p.stamp().phase)
                .is_ok_and(|phase| phase.key == ELIGIBLE_PHASE.key())
        })
        .collect()
}

#[cfg(test)]
#[path = "assignment_tests.rs"]
mod tests;
