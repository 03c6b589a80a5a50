use std::cmp::Reverse;
use std::collections::HashMap;

use crate::model::ResumeRecord;

use super::{personal_info, sectionize, sections, work_experience};

// Open-ended jobs outrank every dated one, so "present" compares as a year
// far past any printable date.
const PRESENT_SORT_YEAR: i32 = 2999;

/// Runs the full pipeline over raw resume text.
pub(crate) fn parse_resume_text(raw_text: &str) -> ResumeRecord {
    assemble(&sectionize::sectionize(raw_text))
}

/// Builds the record from sectioned lines and applies the recency sort.
/// Missing sections behave as empty ones.
pub(crate) fn assemble(section_lines: &HashMap<String, Vec<String>>) -> ResumeRecord {
    let lines_for = |name: &str| {
        section_lines
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    };

    let mut work_experience =
        work_experience::extract_work_experience(lines_for(sectionize::WORK_EXPERIENCE_SECTION));
    sort_most_recent_first(&mut work_experience);

    ResumeRecord {
        personal_info: personal_info::extract_personal_info(lines_for(sectionize::HEADER_SECTION)),
        work_experience,
        education: sections::extract_education(lines_for(sectionize::EDUCATION_SECTION)),
        certifications: Vec::new(),
        skills: sections::extract_skills(lines_for(sectionize::SKILLS_SECTION)),
        summary: sections::extract_summary(lines_for(sectionize::SUMMARY_SECTION)),
    }
}

// Current jobs first, then newest end date. Stable, so equal keys keep their
// input order.
pub(super) fn sort_most_recent_first(jobs: &mut [crate::model::JobEntry]) {
    jobs.sort_by_cached_key(|job| {
        (
            Reverse(job.current),
            Reverse(end_date_sort_key(&job.end_date)),
        )
    });
}

// Reduces an end-date token to a comparable (year, month). Bare years carry
// month 0 and therefore rank below any dated month of the same year.
fn end_date_sort_key(end_date: &str) -> (i32, u32) {
    let trimmed = end_date.trim();

    if trimmed.eq_ignore_ascii_case("present") {
        return (PRESENT_SORT_YEAR, 12);
    }

    if let Some((month_part, year_part)) = trimmed.split_once('/') {
        let month = month_part.trim().parse::<u32>().unwrap_or(0);
        let year = year_part.trim().parse::<i32>().unwrap_or(0);
        return (year, month.min(12));
    }

    (trailing_year(trimmed), month_number(trimmed))
}

fn trailing_year(value: &str) -> i32 {
    value
        .trim_start_matches(|character: char| !character.is_ascii_digit())
        .parse::<i32>()
        .unwrap_or(0)
}

fn month_number(value: &str) -> u32 {
    const MONTH_PREFIXES: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];

    let lowered = value.trim().to_lowercase();
    MONTH_PREFIXES
        .iter()
        .position(|prefix| lowered.starts_with(prefix))
        .map(|index| index as u32 + 1)
        .unwrap_or(0)
}
