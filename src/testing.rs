//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::Entity;

/// Create an entity from its five attributes.
pub fn make_entity(id: &str, title: &str, name: &str, tags: &str, description: &str) -> Entity {
    Entity {
        id: id.to_string(),
        title: title.to_string(),
        name: name.to_string(),
        tags: tags.to_string(),
        description: description.to_string(),
    }
}

/// Create an entity with only a title.
pub fn make_titled(id: &str, title: &str) -> Entity {
    make_entity(id, title, "", "", "")
}

/// The command pod used throughout the scoring examples.
///
/// Tokens with tags enabled: `mk1`, `pod` (12), `mk1pod` (6), `internal`, `command`,
/// `crew` (4), `a`, `small` (2).
pub fn pod_entity() -> Entity {
    make_entity(
        "p1",
        "Mk1 Pod",
        "mk1Pod",
        "?internal command crew",
        "A small pod.",
    )
}

/// A small mixed catalog.
pub fn sample_catalog() -> Vec<Entity> {
    vec![
        pod_entity(),
        make_entity(
            "c1",
            "Mk1 Crew Cabin",
            "crewCabin",
            "crew passenger",
            "Room for two crew.",
        ),
        make_entity(
            "t1",
            "FL-T100 Fuel Tank",
            "fuelTank",
            "fuel tank liquid",
            "A small tank of liquid fuel.",
        ),
        make_entity(
            "e1",
            "LV-T45 Swivel Engine",
            "liquidEngine2",
            "engine rocket liquid thrust",
            "A gimballed liquid fuel engine.",
        ),
        make_entity(
            "w1",
            "Radial Decoupler",
            "radialDecoupler",
            "?stack separator",
            "Detaches side boosters.",
        ),
    ]
}
