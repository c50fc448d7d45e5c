// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic mock data for seeding

use rb_core::{NewLead, NewProperty};

// (display name, email slug)
const FIRST_NAMES: &[(&str, &str)] = &[
    ("Lucía", "lucia"),
    ("Hugo", "hugo"),
    ("Martina", "martina"),
    ("Mateo", "mateo"),
    ("Sofía", "sofia"),
    ("Leo", "leo"),
    ("Valeria", "valeria"),
    ("Daniel", "daniel"),
    ("Paula", "paula"),
    ("Álvaro", "alvaro"),
    ("Julia", "julia"),
    ("Pablo", "pablo"),
    ("Carmen", "carmen"),
];

const LAST_NAMES: &[(&str, &str)] = &[
    ("García", "garcia"),
    ("Martínez", "martinez"),
    ("López", "lopez"),
    ("Sánchez", "sanchez"),
    ("Pérez", "perez"),
    ("Gómez", "gomez"),
    ("Fernández", "fernandez"),
    ("Ruiz", "ruiz"),
    ("Díaz", "diaz"),
    ("Moreno", "moreno"),
    ("Álvarez", "alvarez"),
];

const UNIT_TYPES: &[(&str, u8)] = &[("Piso", 2), ("Ático", 3), ("Estudio", 1), ("Dúplex", 4)];

const NEIGHBOURHOODS: &[&str] = &[
    "Chamberí",
    "Malasaña",
    "Lavapiés",
    "Salamanca",
    "Retiro",
    "Chueca",
    "Arganzuela",
];

const STREETS: &[&str] = &[
    "Calle de Alcalá",
    "Gran Vía",
    "Calle Mayor",
    "Paseo de la Castellana",
    "Calle de Serrano",
    "Calle de Atocha",
    "Calle de Toledo",
];

fn pick<T: Copy>(items: &[T], i: usize) -> T {
    items[i % items.len()]
}

/// The `i`th mock lead (zero-based)
pub fn lead(i: usize) -> NewLead {
    let (first, first_slug) = pick(FIRST_NAMES, i);
    // Offset so names pair differently on each pass through the first names
    let (last, last_slug) = pick(LAST_NAMES, i + i / FIRST_NAMES.len());
    NewLead {
        name: format!("{} {}", first, last),
        email: format!("{}.{}{}@example.com", first_slug, last_slug, i + 1),
        phone: Some(format!(
            "+34 6{:02} {:03} {:03}",
            (i * 7) % 100,
            (i * 131) % 1000,
            (i * 373) % 1000
        )),
        budget: Some(700 + (i % 8) as u32 * 100),
        phase: None,
    }
}

/// The `i`th mock property (zero-based)
pub fn property(i: usize) -> NewProperty {
    let (unit, bedrooms) = pick(UNIT_TYPES, i);
    NewProperty {
        title: format!("{} en {}", unit, pick(NEIGHBOURHOODS, i)),
        address: format!("{} {}, Madrid", pick(STREETS, i), 3 + (i * 17) % 90),
        monthly_rent: 650 + ((i * 137) % 10) as u32 * 85,
        bedrooms: Some(bedrooms),
        phase: None,
    }
}
