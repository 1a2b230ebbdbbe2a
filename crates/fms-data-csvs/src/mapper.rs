/*!
# Row → Match-Result Mapping

Turns one normalized row into a match-result document: alliance team lists
with surrogate/disqualification extraction, score totals, and schema-typed
breakdown fields. Rows arrive with required headers already validated
against the file's header line.
*/

use crate::{
    errors::{ImportError, ImportResult},
    match_result::{AllianceColor, BreakdownValue, MatchResult},
    normalize::{CellValue, NormalizedRow},
    schemas::{self, FieldType},
};

/// A decoded team cell: the team number plus the in-band surrogate (`*`)
/// and disqualification (`d`) markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamCell {
    pub number: u32,
    pub surrogate: bool,
    pub dq: bool,
}

impl TeamCell {
    /// Decodes a raw team cell. The cell is lowercased, an optional `frc`
    /// prefix is dropped, and the remainder must consist of digits plus the
    /// two markers in any order: `d*254`, `254*d` and `frc254` all decode.
    pub fn parse(raw: &str) -> ImportResult<TeamCell> {
        let cell = raw.trim().to_lowercase();
        let body = cell.strip_prefix("frc").unwrap_or(&cell);

        let mut digits = String::new();
        let mut surrogate = false;
        let mut dq = false;
        for ch in body.chars() {
            match ch {
                '0'..='9' => digits.push(ch),
                '*' => surrogate = true,
                'd' => dq = true,
                _ => return Err(ImportError::InvalidTeamCell(raw.to_string())),
            }
        }

        let number = digits
            .parse::<u32>()
            .map_err(|_| ImportError::InvalidTeamCell(raw.to_string()))?;

        Ok(TeamCell {
            number,
            surrogate,
            dq,
        })
    }

    /// Canonical team key: the team number behind the fixed `frc` tag.
    pub fn key(&self) -> String {
        format!("frc{}", self.number)
    }
}

/// Required headers whose cell is empty in this row. A non-empty result
/// marks the row as an unplayed match to be skipped, not an error.
pub fn empty_required_fields(row: &NormalizedRow) -> Vec<&'static str> {
    schemas::REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|h| row.get(*h).is_some_and(CellValue::is_empty))
        .collect()
}

/// Maps one normalized row into a match-result document, not yet validated
/// against the scoring rules.
pub fn map_row(row: &NormalizedRow) -> ImportResult<MatchResult> {
    let mut result = MatchResult {
        comp_level: cell(row, "comp_level")?.to_string(),
        match_number: int_field(row, "match_number")?,
        set_number: int_field(row, "set_number")?,
        ..MatchResult::default()
    };

    // Both the alliance score and its breakdown totalPoints come from the
    // score column; an explicit <color>.totalPoints column may later
    // overwrite the breakdown entry.
    for color in AllianceColor::ALL {
        let score = int_field(row, &format!("{} score", color))?;
        result.alliances.get_mut(color).score = score;
        result
            .score_breakdown
            .get_mut(color)
            .insert("totalPoints".to_string(), BreakdownValue::Int(score));
    }

    assign_teams(row, &mut result)?;
    assign_breakdown(row, &mut result)?;

    Ok(result)
}

fn assign_teams(row: &NormalizedRow, result: &mut MatchResult) -> ImportResult<()> {
    for color in AllianceColor::ALL {
        for slot in 1..=3 {
            let field = format!("{} {}", color, slot);
            let team = TeamCell::parse(&cell(row, &field)?.to_string())?;

            let alliance = result.alliances.get_mut(color);
            if team.surrogate {
                alliance.surrogates.push(team.key());
            }
            if team.dq {
                alliance.dqs.push(team.key());
            }
            alliance.teams.push(team.key());
        }
    }
    Ok(())
}

fn assign_breakdown(row: &NormalizedRow, result: &mut MatchResult) -> ImportResult<()> {
    for (key, value) in row {
        let Some((prefix, field)) = key.split_once('.') else {
            continue;
        };
        let Some(color) = AllianceColor::from_column_segment(prefix) else {
            continue;
        };
        let Some(field_type) = schemas::breakdown_field_type(field) else {
            continue; // unknown dotted columns are fine
        };

        let typed = coerce_breakdown_value(field, field_type, value)?;
        result
            .score_breakdown
            .get_mut(color)
            .insert(field.to_string(), typed);
    }
    Ok(())
}

fn coerce_breakdown_value(
    field: &str,
    field_type: FieldType,
    value: &CellValue,
) -> ImportResult<BreakdownValue> {
    match field_type {
        FieldType::Int => match value {
            CellValue::Int(v) => Ok(BreakdownValue::Int(*v)),
            CellValue::Str(_) => Err(field_type_error(field, "integer", value)),
        },
        FieldType::Bool => match value {
            CellValue::Int(v) => Ok(BreakdownValue::Bool(*v != 0)),
            CellValue::Str(s) if s.eq_ignore_ascii_case("true") => Ok(BreakdownValue::Bool(true)),
            CellValue::Str(s) if s.eq_ignore_ascii_case("false") => Ok(BreakdownValue::Bool(false)),
            CellValue::Str(_) => Err(field_type_error(field, "boolean", value)),
        },
        FieldType::Str => Ok(BreakdownValue::Str(value.to_string())),
    }
}

fn field_type_error(field: &str, expected: &'static str, value: &CellValue) -> ImportError {
    ImportError::FieldType {
        field: field.to_string(),
        expected,
        value: value.to_string(),
    }
}

fn cell<'a>(row: &'a NormalizedRow, field: &str) -> ImportResult<&'a CellValue> {
    row.get(field)
        .ok_or_else(|| ImportError::MissingHeaders(vec![field.to_string()]))
}

fn int_field(row: &NormalizedRow, field: &str) -> ImportResult<i64> {
    let value = cell(row, field)?;
    value
        .as_int()
        .ok_or_else(|| field_type_error(field, "integer", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::coerce_value;

    fn row(cells: &[(&str, &str)]) -> NormalizedRow {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), coerce_value(v)))
            .collect()
    }

    fn base_row() -> Vec<(&'static str, &'static str)> {
        vec![
            ("fms_id", "abc-123"),
            ("comp_level", "qm"),
            ("set_number", "1"),
            ("match_number", "7"),
            ("red 1", "254"),
            ("red 2", "1678"),
            ("red 3", "148"),
            ("red score", "100"),
            ("blue 1", "971"),
            ("blue 2", "604"),
            ("blue 3", "2056"),
            ("blue score", "80"),
        ]
    }

    #[test]
    fn test_team_cell_plain() {
        let team = TeamCell::parse("254").unwrap();
        assert_eq!(
            team,
            TeamCell {
                number: 254,
                surrogate: false,
                dq: false
            }
        );
        assert_eq!(team.key(), "frc254");
    }

    #[test]
    fn test_team_cell_markers_in_any_order() {
        for raw in ["d*254", "*d254", "254d*", "D*254", "2d5*4"] {
            let team = TeamCell::parse(raw).unwrap();
            assert_eq!(team.number, 254, "input {:?}", raw);
            assert!(team.surrogate, "input {:?}", raw);
            assert!(team.dq, "input {:?}", raw);
        }
    }

    #[test]
    fn test_team_cell_single_markers() {
        let surrogate = TeamCell::parse("1678*").unwrap();
        assert!(surrogate.surrogate);
        assert!(!surrogate.dq);

        let dq = TeamCell::parse("d1678").unwrap();
        assert!(dq.dq);
        assert!(!dq.surrogate);
    }

    #[test]
    fn test_team_cell_frc_prefix() {
        assert_eq!(TeamCell::parse("frc254").unwrap().number, 254);
        assert_eq!(TeamCell::parse("FRC254").unwrap().number, 254);
    }

    #[test]
    fn test_team_cell_rejects_garbage() {
        for raw in ["", "*", "team 254", "25x4", "254!"] {
            assert!(
                matches!(
                    TeamCell::parse(raw),
                    Err(ImportError::InvalidTeamCell(_))
                ),
                "input {:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_empty_required_fields() {
        let mut cells = base_row();
        cells[7] = ("red score", "");
        cells[3] = ("match_number", "");
        let missing = empty_required_fields(&row(&cells));
        assert_eq!(missing, ["match_number", "red score"]);
        assert!(empty_required_fields(&row(&base_row())).is_empty());
    }

    #[test]
    fn test_map_row_basic() {
        let result = map_row(&row(&base_row())).unwrap();
        assert_eq!(result.comp_level, "qm");
        assert_eq!(result.match_number, 7);
        assert_eq!(result.set_number, 1);

        let red = result.alliances.get(AllianceColor::Red);
        assert_eq!(red.score, 100);
        assert_eq!(red.teams, ["frc254", "frc1678", "frc148"]);
        assert!(red.surrogates.is_empty());
        assert!(red.dqs.is_empty());

        let blue = result.alliances.get(AllianceColor::Blue);
        assert_eq!(blue.score, 80);
        assert_eq!(blue.teams, ["frc971", "frc604", "frc2056"]);

        // totalPoints mirrors the score column for both alliances.
        assert_eq!(
            result
                .score_breakdown
                .get(AllianceColor::Red)
                .get("totalPoints"),
            Some(&BreakdownValue::Int(100))
        );
        assert_eq!(
            result
                .score_breakdown
                .get(AllianceColor::Blue)
                .get("totalPoints"),
            Some(&BreakdownValue::Int(80))
        );
    }

    #[test]
    fn test_map_row_dq_and_surrogate_markers() {
        let mut cells = base_row();
        cells[4] = ("red 1", "d*254");
        cells[9] = ("blue 2", "604*");
        let result = map_row(&row(&cells)).unwrap();

        let red = result.alliances.get(AllianceColor::Red);
        assert_eq!(red.teams, ["frc254", "frc1678", "frc148"]);
        assert_eq!(red.surrogates, ["frc254"]);
        assert_eq!(red.dqs, ["frc254"]);

        let blue = result.alliances.get(AllianceColor::Blue);
        assert_eq!(blue.surrogates, ["frc604"]);
        assert!(blue.dqs.is_empty());
    }

    #[test]
    fn test_map_row_breakdown_typing() {
        let mut cells = base_row();
        cells.extend([
            ("red.rp", "2"),
            ("red.cargoBonusRankingPoint", "False"),
            ("red.quintetAchieved", "True"),
            ("red.endgameRobot1", "Traversal"),
            ("red.taxiRobot1", "No"),
            ("blue.endgamePoints", "10"),
        ]);
        let result = map_row(&row(&cells)).unwrap();

        let red = result.score_breakdown.get(AllianceColor::Red);
        assert_eq!(red.get("rp"), Some(&BreakdownValue::Int(2)));
        assert_eq!(
            red.get("cargoBonusRankingPoint"),
            Some(&BreakdownValue::Bool(false))
        );
        assert_eq!(red.get("quintetAchieved"), Some(&BreakdownValue::Bool(true)));
        assert_eq!(
            red.get("endgameRobot1"),
            Some(&BreakdownValue::Str("Traversal".to_string()))
        );
        assert_eq!(
            red.get("taxiRobot1"),
            Some(&BreakdownValue::Str("No".to_string()))
        );

        let blue = result.score_breakdown.get(AllianceColor::Blue);
        assert_eq!(blue.get("endgamePoints"), Some(&BreakdownValue::Int(10)));
        // Columns only populate their own alliance.
        assert_eq!(blue.get("rp"), None);
    }

    #[test]
    fn test_map_row_ignores_unknown_dotted_columns() {
        let mut cells = base_row();
        cells.extend([("red.futureField", "7"), ("green.rp", "2"), ("notes.x", "y")]);
        let result = map_row(&row(&cells)).unwrap();
        let red = result.score_breakdown.get(AllianceColor::Red);
        assert_eq!(red.get("futureField"), None);
        assert_eq!(red.len(), 1); // totalPoints only
    }

    #[test]
    fn test_map_row_rejects_bad_types() {
        let mut cells = base_row();
        cells[7] = ("red score", "lots");
        let err = map_row(&row(&cells)).unwrap_err();
        assert!(err.to_string().contains("red score"));

        let mut cells = base_row();
        cells.push(("red.cargoBonusRankingPoint", "maybe"));
        let err = map_row(&row(&cells)).unwrap_err();
        assert!(err.to_string().contains("cargoBonusRankingPoint"));

        let mut cells = base_row();
        cells.push(("blue.autoPoints", "some"));
        let err = map_row(&row(&cells)).unwrap_err();
        assert!(err.to_string().contains("autoPoints"));
    }

    #[test]
    fn test_map_row_explicit_total_points_column_wins() {
        let mut cells = base_row();
        cells.push(("red.totalPoints", "101"));
        let result = map_row(&row(&cells)).unwrap();
        assert_eq!(
            result
                .score_breakdown
                .get(AllianceColor::Red)
                .get("totalPoints"),
            Some(&BreakdownValue::Int(101))
        );
        // The alliance score still comes from the score column.
        assert_eq!(result.alliances.get(AllianceColor::Red).score, 100);
    }
}
