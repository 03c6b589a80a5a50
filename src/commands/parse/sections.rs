use crate::model::EducationEntry;

use super::compile_pattern;

const YEAR_PATTERN: &str = r"\b\d{4}\b";

/// Positional heuristic: institution, then degree, then a line carrying the
/// graduation year. Produces at most one entry.
pub(crate) fn extract_education(lines: &[String]) -> Vec<EducationEntry> {
    let Some(institution) = lines.first() else {
        return Vec::new();
    };

    let degree = lines
        .get(1)
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .unwrap_or_else(|| "N/A".to_string());

    let graduation_date = lines
        .get(2)
        .and_then(|line| {
            let year_regex = compile_pattern(YEAR_PATTERN)?;
            year_regex.find(line).map(|found| found.as_str().to_string())
        })
        .unwrap_or_else(|| "N/A".to_string());

    vec![EducationEntry {
        institution: institution.trim().to_string(),
        degree,
        field: None,
        graduation_date,
        gpa: None,
    }]
}

/// Splits the skills lines on the delimiters resumes actually use. Tokens of
/// one character are noise from stray separators and are dropped.
pub(crate) fn extract_skills(lines: &[String]) -> Vec<String> {
    lines
        .join(", ")
        .split(['\n', ',', ';', '|'])
        .map(str::trim)
        .filter(|token| token.chars().count() > 1)
        .map(ToOwned::to_owned)
        .collect()
}

pub(crate) fn extract_summary(lines: &[String]) -> Option<String> {
    let joined = lines.join(" ").trim().to_string();
    if joined.is_empty() { None } else { Some(joined) }
}
