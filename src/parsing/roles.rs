use std::path::Path;

use tracing::warn;

use crate::parsing::{data_lines, split_list, ParseError};
use crate::rules::table::{BasicRoleCondition, BonusRoleCondition};

/// Parse a basic-role TSV file with columns:
/// name, allowed, disallowed, score, priority, special
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `MissingHeader` /
/// `MissingColumn` if the header row is absent or incomplete.
pub fn parse_basic_roles_file(path: &Path) -> Result<Vec<BasicRoleCondition>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_basic_roles_tsv(&content)
}

/// Parse basic-role TSV text.
///
/// An empty `allowed` field means "any attribute". The `special` field
/// accepts true/false, yes/no, or 1/0. Malformed rows are skipped.
///
/// # Errors
///
/// Returns `ParseError::MissingHeader` or `ParseError::MissingColumn` if the
/// header row is unusable.
pub fn parse_basic_roles_tsv(text: &str) -> Result<Vec<BasicRoleCondition>, ParseError> {
    let (header, rows) = data_lines(text)?;

    let name_col = header.require("name")?;
    let allowed_col = header.require("allowed")?;
    let disallowed_col = header.require("disallowed")?;
    let score_col = header.require("score")?;
    let priority_col = header.require("priority")?;
    let special_col = header.require("special")?;

    let mut conditions = Vec::new();
    for (line_num, fields) in rows {
        let name = match header.field(&fields, name_col) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                warn!(line = line_num, "skipping basic-role row without a name");
                continue;
            }
        };

        let allowed = match header.field(&fields, allowed_col) {
            Some("") | None => None,
            Some(field) => Some(split_list(field).into_iter().collect()),
        };
        let disallowed = header
            .field(&fields, disallowed_col)
            .map(split_list)
            .unwrap_or_default()
            .into_iter()
            .collect();

        let Some(score) = header.field(&fields, score_col).and_then(|s| s.parse().ok()) else {
            warn!(line = line_num, %name, "skipping basic-role row with invalid score");
            continue;
        };
        let Some(priority) = header
            .field(&fields, priority_col)
            .and_then(|s| s.parse().ok())
        else {
            warn!(line = line_num, %name, "skipping basic-role row with invalid priority");
            continue;
        };
        let Some(special) = header.field(&fields, special_col).and_then(parse_flag) else {
            warn!(line = line_num, %name, "skipping basic-role row with invalid special flag");
            continue;
        };

        conditions.push(BasicRoleCondition {
            name,
            allowed,
            disallowed,
            score,
            priority,
            special,
        });
    }

    Ok(conditions)
}

/// Parse a bonus-role TSV file with columns:
/// name, condition, required_count, targets, bonus_score
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `MissingHeader` /
/// `MissingColumn` if the header row is absent or incomplete.
pub fn parse_bonus_roles_file(path: &Path) -> Result<Vec<BonusRoleCondition>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_bonus_roles_tsv(&content)
}

/// Parse bonus-role TSV text.
///
/// The `condition` column is documentation only and carried through verbatim.
/// Malformed rows are skipped.
///
/// # Errors
///
/// Returns `ParseError::MissingHeader` or `ParseError::MissingColumn` if the
/// header row is unusable.
pub fn parse_bonus_roles_tsv(text: &str) -> Result<Vec<BonusRoleCondition>, ParseError> {
    let (header, rows) = data_lines(text)?;

    let name_col = header.require("name")?;
    let condition_col = header.require("condition")?;
    let count_col = header.require("required_count")?;
    let targets_col = header.require("targets")?;
    let score_col = header.require("bonus_score")?;

    let mut conditions = Vec::new();
    for (line_num, fields) in rows {
        let name = match header.field(&fields, name_col) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                warn!(line = line_num, "skipping bonus-role row without a name");
                continue;
            }
        };

        let condition = header
            .field(&fields, condition_col)
            .unwrap_or_default()
            .to_string();

        let Some(required_count) = header.field(&fields, count_col).and_then(|s| s.parse().ok())
        else {
            warn!(line = line_num, %name, "skipping bonus-role row with invalid required_count");
            continue;
        };
        let targets: std::collections::HashSet<String> = header
            .field(&fields, targets_col)
            .map(split_list)
            .unwrap_or_default()
            .into_iter()
            .collect();
        if targets.is_empty() {
            warn!(line = line_num, %name, "skipping bonus-role row without targets");
            continue;
        }
        let Some(bonus_score) = header.field(&fields, score_col).and_then(|s| s.parse().ok())
        else {
            warn!(line = line_num, %name, "skipping bonus-role row with invalid bonus_score");
            continue;
        };

        conditions.push(BonusRoleCondition {
            name,
            condition,
            required_count,
            targets,
            bonus_score,
        });
    }

    Ok(conditions)
}

fn parse_flag(field: &str) -> Option<bool> {
    match field.to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" | "" => Some(false),
        _ => None,
    }
}
