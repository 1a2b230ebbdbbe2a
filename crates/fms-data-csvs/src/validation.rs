/*!
# Scoring-Rule Validation

Re-derives the ranking points an alliance must have earned from its score
breakdown and checks endgame totals against the finite set of legal
outcomes. Rows failing either rule abort the import; the FMS export is
expected to be corrected and the tool re-run.
*/

use std::cmp::Ordering;

use crate::{
    errors::{ImportError, ImportResult},
    match_result::{AllianceColor, Breakdown, BreakdownValue, MatchResult},
    schemas,
};

/// Fields that must all be recorded before the ranking-point rule can be
/// re-derived for an alliance.
const RP_REQUIRED_FIELDS: [&str; 4] = [
    "rp",
    "cargoBonusRankingPoint",
    "hangarBonusRankingPoint",
    "totalPoints",
];

/// Checks both alliances against the scoring rules, red first. Success
/// means the document is accepted for writing.
pub fn validate_match_result(result: &MatchResult) -> ImportResult<()> {
    for color in AllianceColor::ALL {
        let breakdown = result.score_breakdown.get(color);
        let opponent = result.score_breakdown.get(color.opponent());

        check_ranking_points(result, color, breakdown, opponent)?;
        check_endgame_points(color, breakdown)?;
    }
    Ok(())
}

fn check_ranking_points(
    result: &MatchResult,
    color: AllianceColor,
    breakdown: &Breakdown,
    opponent: &Breakdown,
) -> ImportResult<()> {
    let fields = (
        int_value(breakdown, "rp"),
        bool_value(breakdown, "cargoBonusRankingPoint"),
        bool_value(breakdown, "hangarBonusRankingPoint"),
        int_value(breakdown, "totalPoints"),
        int_value(opponent, "totalPoints"),
    );
    let (Some(rp), Some(cargo_bonus), Some(hangar_bonus), Some(total), Some(opponent_total)) =
        fields
    else {
        // The rule only applies once every determining field is recorded.
        return Ok(());
    };

    let score_diff = total - opponent_total;
    let mut expected = match score_diff.cmp(&0) {
        Ordering::Greater => 2,
        Ordering::Equal => 1,
        Ordering::Less => 0,
    };
    if cargo_bonus {
        expected += 1;
    }
    if hangar_bonus {
        expected += 1;
    }
    if result.comp_level != schemas::QUALIFICATION_LEVEL {
        // FMS never awards ranking points outside qualification matches.
        expected = 0;
    }

    if rp != expected {
        return Err(ImportError::RankingPointMismatch {
            alliance: color.as_str(),
            expected,
            actual: rp,
        });
    }
    Ok(())
}

fn check_endgame_points(color: AllianceColor, breakdown: &Breakdown) -> ImportResult<()> {
    let Some(points) = int_value(breakdown, "endgamePoints") else {
        return Ok(());
    };
    if !schemas::legal_endgame_totals().contains(&points) {
        return Err(ImportError::InvalidEndgamePoints {
            alliance: color.as_str(),
            points,
        });
    }
    Ok(())
}

fn int_value(breakdown: &Breakdown, field: &str) -> Option<i64> {
    breakdown.get(field).and_then(BreakdownValue::as_int)
}

fn bool_value(breakdown: &Breakdown, field: &str) -> Option<bool> {
    breakdown.get(field).and_then(BreakdownValue::as_bool)
}
