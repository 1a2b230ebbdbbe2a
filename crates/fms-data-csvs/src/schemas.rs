/*!
# Score-Breakdown Schema Definitions

This module fixes the per-season score-breakdown contract: which breakdown
fields exist, what type each one carries, and the finite set of endgame
totals three robots can legally reach. The table is static configuration;
supporting a new game season means adding a new table here, not changing the
import algorithm.
*/

use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Game season the current breakdown tables describe.
pub const SCHEMA_SEASON: &str = "2022";

/// Comp level code for qualification matches. Only qualification matches
/// award ranking points.
pub const QUALIFICATION_LEVEL: &str = "qm";

/// Headers every match-results export must carry, in canonical
/// (first-segment-lowercased) form.
pub const REQUIRED_HEADERS: &[&str] = &[
    "fms_id",
    "comp_level",
    "set_number",
    "match_number",
    "blue 1",
    "blue 2",
    "blue 3",
    "blue score",
    "red 1",
    "red 2",
    "red 3",
    "red score",
];

// ================================================================================================
// Breakdown field table
// ================================================================================================

/// Declared value type of a score-breakdown field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Bool,
    Int,
    Str,
}

/// Known 2022 score-breakdown fields and their declared types.
///
/// Export columns referencing a field outside this table are ignored, which
/// keeps the importer forward-compatible with extra columns.
pub const BREAKDOWN_FIELDS_2022: &[(&str, FieldType)] = &[
    ("adjustPoints", FieldType::Int),
    ("autoCargoLowerBlue", FieldType::Int),
    ("autoCargoLowerFar", FieldType::Int),
    ("autoCargoLowerNear", FieldType::Int),
    ("autoCargoLowerRed", FieldType::Int),
    ("autoCargoPoints", FieldType::Int),
    ("autoCargoTotal", FieldType::Int),
    ("autoCargoUpperBlue", FieldType::Int),
    ("autoCargoUpperFar", FieldType::Int),
    ("autoCargoUpperNear", FieldType::Int),
    ("autoCargoUpperRed", FieldType::Int),
    ("autoPoints", FieldType::Int),
    ("autoTaxiPoints", FieldType::Int),
    ("cargoBonusRankingPoint", FieldType::Bool),
    ("endgamePoints", FieldType::Int),
    ("endgameRobot1", FieldType::Str),
    ("endgameRobot2", FieldType::Str),
    ("endgameRobot3", FieldType::Str),
    ("foulCount", FieldType::Int),
    ("foulPoints", FieldType::Int),
    ("hangarBonusRankingPoint", FieldType::Bool),
    ("matchCargoTotal", FieldType::Int),
    ("quintetAchieved", FieldType::Bool),
    ("rp", FieldType::Int),
    ("taxiRobot1", FieldType::Str),
    ("taxiRobot2", FieldType::Str),
    ("taxiRobot3", FieldType::Str),
    ("techFoulCount", FieldType::Int),
    ("teleopCargoLowerBlue", FieldType::Int),
    ("teleopCargoLowerFar", FieldType::Int),
    ("teleopCargoLowerNear", FieldType::Int),
    ("teleopCargoLowerRed", FieldType::Int),
    ("teleopCargoPoints", FieldType::Int),
    ("teleopCargoTotal", FieldType::Int),
    ("teleopCargoUpperBlue", FieldType::Int),
    ("teleopCargoUpperFar", FieldType::Int),
    ("teleopCargoUpperNear", FieldType::Int),
    ("teleopCargoUpperRed", FieldType::Int),
    ("teleopPoints", FieldType::Int),
    ("totalPoints", FieldType::Int),
];

/// Looks up a breakdown field's declared type in the current season table.
pub fn breakdown_field_type(field: &str) -> Option<FieldType> {
    BREAKDOWN_FIELDS_2022
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, ty)| *ty)
}

// ================================================================================================
// Endgame outcomes
// ================================================================================================

/// Points a single robot can score in the 2022 endgame, one value per
/// hangar rung (plus zero for no climb).
pub const ENDGAME_ROBOT_POINTS_2022: [i64; 5] = [0, 4, 6, 10, 15];

/// Every endgame total an alliance can legally reach: the sums of three
/// values drawn with repetition from [`ENDGAME_ROBOT_POINTS_2022`].
pub fn legal_endgame_totals() -> &'static BTreeSet<i64> {
    static TOTALS: OnceLock<BTreeSet<i64>> = OnceLock::new();
    TOTALS.get_or_init(|| {
        let mut totals = BTreeSet::new();
        for a in ENDGAME_ROBOT_POINTS_2022 {
            for b in ENDGAME_ROBOT_POINTS_2022 {
                for c in ENDGAME_ROBOT_POINTS_2022 {
                    totals.insert(a + b + c);
                }
            }
        }
        totals
    })
}

// ================================================================================================
// Tests
// ================================================================================================
