use std::collections::HashMap;

pub(super) const HEADER_SECTION: &str = "header";
pub(super) const SUMMARY_SECTION: &str = "summary";
pub(super) const WORK_EXPERIENCE_SECTION: &str = "workExperience";
pub(super) const EDUCATION_SECTION: &str = "education";
pub(super) const SKILLS_SECTION: &str = "skills";

// Evaluated top to bottom; the first keyword the lowered line starts with
// wins, so ordering is part of the contract.
const SECTION_KEYWORDS: &[(&str, &str)] = &[
    ("summary", SUMMARY_SECTION),
    ("objective", SUMMARY_SECTION),
    ("professional summary", SUMMARY_SECTION),
    ("profile", SUMMARY_SECTION),
    ("experience", WORK_EXPERIENCE_SECTION),
    ("professional experience", WORK_EXPERIENCE_SECTION),
    ("work history", WORK_EXPERIENCE_SECTION),
    ("employment", WORK_EXPERIENCE_SECTION),
    ("relevant experience", WORK_EXPERIENCE_SECTION),
    ("education", EDUCATION_SECTION),
    ("academic background", EDUCATION_SECTION),
    ("skills", SKILLS_SECTION),
    ("technical skills", SKILLS_SECTION),
    ("proficiencies", SKILLS_SECTION),
    ("expertise", SKILLS_SECTION),
];

// Lines at least this long never count as section headers, even when they
// start with a keyword. Guards against matches inside body text.
const MAX_HEADER_LINE_CHARS: usize = 50;

/// Splits raw resume text into named sections. Everything before the first
/// recognized header keyword lands in `header`; header lines themselves are
/// delimiters only and are never emitted.
pub(crate) fn sectionize(raw_text: &str) -> HashMap<String, Vec<String>> {
    let mut sections = HashMap::<String, Vec<String>>::new();
    for name in [
        HEADER_SECTION,
        SUMMARY_SECTION,
        WORK_EXPERIENCE_SECTION,
        EDUCATION_SECTION,
        SKILLS_SECTION,
    ] {
        sections.insert(name.to_string(), Vec::new());
    }

    let mut current_section = HEADER_SECTION;

    for line in raw_text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match detect_section_header(line) {
            Some(section) => current_section = section,
            None => sections
                .entry(current_section.to_string())
                .or_default()
                .push(line.to_string()),
        }
    }

    sections
}

fn detect_section_header(line: &str) -> Option<&'static str> {
    if line.chars().count() >= MAX_HEADER_LINE_CHARS {
        return None;
    }

    let lowered = line.to_lowercase();
    SECTION_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.starts_with(keyword))
        .map(|(_, section)| *section)
}
