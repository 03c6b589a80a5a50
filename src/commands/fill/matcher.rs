use crate::model::{FieldMapping, FormField, ResumeRecord};

use super::rules::MATCH_RULES;

/// Attempts one match per field, preserving input order. Fields with no
/// keyword hit, or whose resolved value is empty, yield no mapping.
pub(crate) fn match_fields(record: &ResumeRecord, fields: &[FormField]) -> Vec<FieldMapping> {
    fields
        .iter()
        .filter_map(|field| find_best_match(record, field))
        .collect()
}

fn find_best_match(record: &ResumeRecord, field: &FormField) -> Option<FieldMapping> {
    let haystack = normalize_field_text(&format!("{} {} {}", field.label, field.name, field.id));

    let rule = MATCH_RULES.iter().find(|rule| {
        rule.keywords
            .iter()
            .any(|keyword| haystack.contains(keyword))
    })?;

    let value = (rule.resolve)(record);
    if value.trim().is_empty() {
        return None;
    }

    Some(FieldMapping {
        field: field.clone(),
        mapped_to: rule.mapped_to.to_string(),
        value,
    })
}

// Labels, names, and ids arrive in mixed conventions; snake_case and
// kebab-case both collapse to spaced words before keyword lookup.
fn normalize_field_text(text: &str) -> String {
    text.to_lowercase().replace(['_', '-'], " ").trim().to_string()
}
