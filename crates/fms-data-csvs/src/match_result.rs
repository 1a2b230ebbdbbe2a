/*!
# Match-Result Document Types

The output document written for every accepted row, shaped to match what the
downstream field-monitor tooling consumes. The `fms_id` keys the on-disk
artifact names and is intentionally not part of the document itself.
*/

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// One of the two three-team sides competing in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllianceColor {
    Red,
    Blue,
}

impl AllianceColor {
    /// Processing order: red first, matching the FMS report ordering.
    pub const ALL: [AllianceColor; 2] = [AllianceColor::Red, AllianceColor::Blue];

    pub fn as_str(self) -> &'static str {
        match self {
            AllianceColor::Red => "red",
            AllianceColor::Blue => "blue",
        }
    }

    pub fn opponent(self) -> AllianceColor {
        match self {
            AllianceColor::Red => AllianceColor::Blue,
            AllianceColor::Blue => AllianceColor::Red,
        }
    }

    /// Parses the leading segment of a dotted column name. Unknown segments
    /// return `None` so unrelated export columns pass through untouched.
    pub fn from_column_segment(segment: &str) -> Option<AllianceColor> {
        match segment {
            "red" => Some(AllianceColor::Red),
            "blue" => Some(AllianceColor::Blue),
            _ => None,
        }
    }
}

impl fmt::Display for AllianceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-alliance pair of values, serialized with `blue` first to match the
/// document layout the report consumers expect.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlliancePair<T> {
    pub blue: T,
    pub red: T,
}

impl<T> AlliancePair<T> {
    pub fn get(&self, color: AllianceColor) -> &T {
        match color {
            AllianceColor::Red => &self.red,
            AllianceColor::Blue => &self.blue,
        }
    }

    pub fn get_mut(&mut self, color: AllianceColor) -> &mut T {
        match color {
            AllianceColor::Red => &mut self.red,
            AllianceColor::Blue => &mut self.blue,
        }
    }
}

/// A scalar score-breakdown value, serialized as a bare JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BreakdownValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl BreakdownValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            BreakdownValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BreakdownValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

/// Per-alliance breakdown-field map. Only fields present in both the schema
/// and the row are populated.
pub type Breakdown = BTreeMap<String, BreakdownValue>;

/// Per-alliance result fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AllianceResult {
    /// Team keys disqualified from receiving credit for this match.
    pub dqs: Vec<String>,
    pub score: i64,
    /// Team keys whose result does not count toward their ranking average.
    pub surrogates: Vec<String>,
    /// All three team keys, in slot order.
    pub teams: Vec<String>,
}

/// A single match-result document, written as `<fms_id>.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchResult {
    pub comp_level: String,
    pub match_number: i64,
    pub set_number: i64,
    pub alliances: AlliancePair<AllianceResult>,
    pub score_breakdown: AlliancePair<Breakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alliance_color_helpers() {
        assert_eq!(AllianceColor::Red.as_str(), "red");
        assert_eq!(AllianceColor::Red.opponent(), AllianceColor::Blue);
        assert_eq!(AllianceColor::Blue.opponent(), AllianceColor::Red);
        assert_eq!(
            AllianceColor::from_column_segment("blue"),
            Some(AllianceColor::Blue)
        );
        assert_eq!(AllianceColor::from_column_segment("green"), None);
        // Dotted-column matching happens after normalization, so the
        // segment arrives already lowercased.
        assert_eq!(AllianceColor::from_column_segment("Red"), None);
    }

    #[test]
    fn test_match_result_json_shape() {
        let mut result = MatchResult {
            comp_level: "qm".to_string(),
            match_number: 12,
            set_number: 1,
            ..MatchResult::default()
        };
        {
            let red = result.alliances.get_mut(AllianceColor::Red);
            red.score = 100;
            red.teams = vec!["frc254".to_string()];
        }
        result.score_breakdown.get_mut(AllianceColor::Red).extend([
            ("totalPoints".to_string(), BreakdownValue::Int(100)),
            ("cargoBonusRankingPoint".to_string(), BreakdownValue::Bool(false)),
            ("endgameRobot1".to_string(), BreakdownValue::Str("Traversal".to_string())),
        ]);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["comp_level"], "qm");
        assert_eq!(value["match_number"], 12);
        assert_eq!(value["alliances"]["red"]["score"], 100);
        assert_eq!(value["alliances"]["red"]["teams"][0], "frc254");
        assert_eq!(value["alliances"]["blue"]["score"], 0);
        // Untagged scalars: no enum wrapper objects in the JSON.
        assert_eq!(value["score_breakdown"]["red"]["totalPoints"], 100);
        assert_eq!(value["score_breakdown"]["red"]["cargoBonusRankingPoint"], false);
        assert_eq!(value["score_breakdown"]["red"]["endgameRobot1"], "Traversal");
    }
}
