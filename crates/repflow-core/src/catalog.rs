//! Workout content catalog.
//!
//! The catalog is read-only data supplied from outside the engine: a list
//! of equipment groups, each holding per-difficulty lists of workout
//! descriptors, plus a fixed rotation of daily challenges. The engine
//! consumes it through the [`CatalogProvider`] trait so tests can inject
//! small synthetic catalogs instead of the full content set.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(ValidationError::InvalidValue {
                field: "difficulty".into(),
                message: format!("expected beginner|intermediate|advanced, got '{other}'"),
            }),
        }
    }
}

/// A coaching tip attached to a workout. The icon is an opaque identifier
/// resolved by the presentation layer; the engine never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Immutable record describing one routine.
///
/// Two descriptors with identical (name, equipment, difficulty) are the
/// same selectable unit regardless of other field differences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDescriptor {
    pub name: String,
    pub equipment: String,
    pub difficulty: Difficulty,
    /// Advisory free text, e.g. "12-14 min". Never parsed for timing.
    pub duration_label: String,
    /// Structured free text. Lines starting with a bullet marker denote
    /// discrete movements, other lines denote directives.
    pub instructions: String,
    #[serde(default)]
    pub tips: Vec<Tip>,
}

impl WorkoutDescriptor {
    /// Canonical identity of this descriptor. See [`canonical_id`].
    pub fn canonical_id(&self) -> String {
        canonical_id(&self.name, &self.equipment, self.difficulty)
    }
}

/// Stable string key for (name, equipment, difficulty).
///
/// Each field is lowercased with whitespace collapsed to hyphens, then the
/// three are hyphen-joined: ("Squats", "Dumbbells", Beginner) yields
/// "squats-dumbbells-beginner". Deterministic and collision-resistant for
/// practical catalog sizes.
///
/// Known ambiguity: the separator also appears inside hyphenated names,
/// so "Push-up"/"Push up" and cross-field splits like ("a b", "c") vs
/// ("a", "b c") collide. Accepted -- the id format is fixed by the
/// external catalog's readable ids, and its content avoids such pairs.
pub fn canonical_id(name: &str, equipment: &str, difficulty: Difficulty) -> String {
    format!(
        "{}-{}-{}",
        slug(name),
        slug(equipment),
        difficulty.as_str()
    )
}

fn slug(field: &str) -> String {
    field
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// One equipment family with its per-difficulty workout lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentGroup {
    pub equipment: String,
    pub icon: String,
    #[serde(default)]
    pub beginner: Vec<WorkoutDescriptor>,
    #[serde(default)]
    pub intermediate: Vec<WorkoutDescriptor>,
    #[serde(default)]
    pub advanced: Vec<WorkoutDescriptor>,
}

impl EquipmentGroup {
    pub fn workouts_for(&self, difficulty: Difficulty) -> &[WorkoutDescriptor] {
        match difficulty {
            Difficulty::Beginner => &self.beginner,
            Difficulty::Intermediate => &self.intermediate,
            Difficulty::Advanced => &self.advanced,
        }
    }
}

/// Read-only data provider the engine consumes.
pub trait CatalogProvider {
    fn equipment_groups(&self) -> &[EquipmentGroup];

    /// Fixed ordered candidate list for the daily rotation.
    fn daily_challenges(&self) -> &[WorkoutDescriptor];

    /// Workouts for one (equipment, difficulty) pair; empty if the
    /// equipment is unknown.
    fn workouts_for(&self, equipment: &str, difficulty: Difficulty) -> &[WorkoutDescriptor] {
        self.equipment_groups()
            .iter()
            .find(|g| g.equipment.eq_ignore_ascii_case(equipment))
            .map(|g| g.workouts_for(difficulty))
            .unwrap_or(&[])
    }

    /// Look a descriptor up by canonical identity.
    fn find_by_id(&self, id: &str) -> Option<&WorkoutDescriptor> {
        self.equipment_groups()
            .iter()
            .flat_map(|g| {
                Difficulty::ALL
                    .iter()
                    .flat_map(move |d| g.workouts_for(*d).iter())
            })
            .find(|w| w.canonical_id() == id)
    }
}

/// In-memory catalog, either the builtin sample or one loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    pub groups: Vec<EquipmentGroup>,
    #[serde(default)]
    pub challenges: Vec<WorkoutDescriptor>,
}

impl CatalogProvider for StaticCatalog {
    fn equipment_groups(&self) -> &[EquipmentGroup] {
        &self.groups
    }

    fn daily_challenges(&self) -> &[WorkoutDescriptor] {
        &self.challenges
    }
}

impl StaticCatalog {
    /// Load a catalog from a JSON file and validate identity fields.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let catalog: StaticCatalog = serde_json::from_str(&raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Presence checks on the fields the canonical identity depends on.
    /// Anything beyond that is the content author's problem.
    pub fn validate(&self) -> Result<()> {
        let all = self
            .groups
            .iter()
            .flat_map(|g| {
                Difficulty::ALL
                    .iter()
                    .flat_map(move |d| g.workouts_for(*d).iter())
            })
            .chain(self.challenges.iter());
        for (index, workout) in all.enumerate() {
            if workout.name.trim().is_empty() {
                return Err(ValidationError::MissingField {
                    field: "name",
                    index,
                }
                .into());
            }
            if workout.equipment.trim().is_empty() {
                return Err(ValidationError::MissingField {
                    field: "equipment",
                    index,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Small builtin sample standing in for the external content catalog.
    pub fn builtin() -> Self {
        fn workout(
            name: &str,
            equipment: &str,
            difficulty: Difficulty,
            duration_label: &str,
            instructions: &str,
        ) -> WorkoutDescriptor {
            WorkoutDescriptor {
                name: name.into(),
                equipment: equipment.into(),
                difficulty,
                duration_label: duration_label.into(),
                instructions: instructions.into(),
                tips: Vec::new(),
            }
        }

        Self {
            groups: vec![
                EquipmentGroup {
                    equipment: "Dumbbells".into(),
                    icon: "dumbbell".into(),
                    beginner: vec![
                        workout(
                            "Squats",
                            "Dumbbells",
                            Difficulty::Beginner,
                            "12-14 min",
                            "- Goblet squat x12\n- Rest 45s\nKeep heels planted.",
                        ),
                        workout(
                            "Shoulder Press",
                            "Dumbbells",
                            Difficulty::Beginner,
                            "10 min",
                            "- Seated press x10\n- Rest 60s\nBrace your core.",
                        ),
                    ],
                    intermediate: vec![workout(
                        "Renegade Rows",
                        "Dumbbells",
                        Difficulty::Intermediate,
                        "15 min",
                        "- Row x8 per side\n- Rest 45s\nHips stay square.",
                    )],
                    advanced: vec![workout(
                        "Thrusters",
                        "Dumbbells",
                        Difficulty::Advanced,
                        "18-20 min",
                        "- Thruster x10\n- Rest 30s\nDrive through the heels.",
                    )],
                },
                EquipmentGroup {
                    equipment: "Bodyweight".into(),
                    icon: "body".into(),
                    beginner: vec![workout(
                        "Plank Circuit",
                        "Bodyweight",
                        Difficulty::Beginner,
                        "8 min",
                        "- Plank 30s\n- Side plank 20s per side\nBreathe steadily.",
                    )],
                    intermediate: vec![workout(
                        "Push-up Ladder",
                        "Bodyweight",
                        Difficulty::Intermediate,
                        "12 min",
                        "- Push-ups 2,4,6,8\n- Rest 30s between rungs\nFull lockout at the top.",
                    )],
                    advanced: vec![workout(
                        "Burpee Intervals",
                        "Bodyweight",
                        Difficulty::Advanced,
                        "16 min",
                        "- Burpees 40s on / 20s off x8\nLand soft.",
                    )],
                },
            ],
            challenges: vec![
                workout(
                    "Core Blast",
                    "Bodyweight",
                    Difficulty::Intermediate,
                    "7 min",
                    "- Hollow hold 30s\n- V-ups x15\n- Rest 30s, repeat x3",
                ),
                workout(
                    "Leg Day Finisher",
                    "Bodyweight",
                    Difficulty::Beginner,
                    "6 min",
                    "- Walking lunges x20\n- Wall sit 45s\n- Rest 45s, repeat x2",
                ),
                workout(
                    "Grip and Carry",
                    "Dumbbells",
                    Difficulty::Advanced,
                    "10 min",
                    "- Farmer carry 40m\n- Rest 60s, repeat x5",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn canonical_id_matches_expected_shape() {
        assert_eq!(
            canonical_id("Squats", "Dumbbells", Difficulty::Beginner),
            "squats-dumbbells-beginner"
        );
    }

    #[test]
    fn canonical_id_collapses_whitespace() {
        assert_eq!(
            canonical_id("  Push-up  Ladder ", "Bodyweight", Difficulty::Intermediate),
            "push-up-ladder-bodyweight-intermediate"
        );
    }

    #[test]
    fn difficulty_changes_identity() {
        let a = canonical_id("Squats", "Dumbbells", Difficulty::Beginner);
        let b = canonical_id("Squats", "Dumbbells", Difficulty::Advanced);
        assert_ne!(a, b);
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = StaticCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert!(!catalog.equipment_groups().is_empty());
        assert_eq!(catalog.daily_challenges().len(), 3);
    }

    #[test]
    fn find_by_id_resolves_builtin_workout() {
        let catalog = StaticCatalog::builtin();
        let found = catalog.find_by_id("squats-dumbbells-beginner");
        assert_eq!(found.map(|w| w.name.as_str()), Some("Squats"));
    }

    #[test]
    fn workouts_for_unknown_equipment_is_empty() {
        let catalog = StaticCatalog::builtin();
        assert!(catalog.workouts_for("Kettlebells", Difficulty::Beginner).is_empty());
    }

    #[test]
    fn loads_catalog_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, serde_json::to_string(&StaticCatalog::builtin()).unwrap()).unwrap();

        let loaded = StaticCatalog::from_json_path(&path).unwrap();
        assert_eq!(loaded.equipment_groups().len(), 2);
        assert!(loaded.find_by_id("squats-dumbbells-beginner").is_some());
    }

    #[test]
    fn loader_rejects_blank_identity_field() {
        let mut catalog = StaticCatalog::builtin();
        catalog.groups[1].advanced[0].equipment = " ".into();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, serde_json::to_string(&catalog).unwrap()).unwrap();

        let err = StaticCatalog::from_json_path(&path).unwrap_err();
        assert!(err.to_string().contains("equipment"));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut catalog = StaticCatalog::builtin();
        catalog.groups[0].beginner[0].name = "  ".into();
        assert!(catalog.validate().is_err());
    }

    proptest! {
        #[test]
        fn identity_is_deterministic(name in "[a-zA-Z ]{1,24}", equipment in "[a-zA-Z]{1,12}") {
            let a = canonical_id(&name, &equipment, Difficulty::Intermediate);
            let b = canonical_id(&name, &equipment, Difficulty::Intermediate);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn identity_is_name_sensitive(
            a in "[a-z]{1,16}",
            b in "[a-z]{1,16}",
            equipment in "[a-z]{1,8}",
        ) {
            prop_assume!(a != b);
            prop_assert_ne!(
                canonical_id(&a, &equipment, Difficulty::Beginner),
                canonical_id(&b, &equipment, Difficulty::Beginner)
            );
        }
    }
}
