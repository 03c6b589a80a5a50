use std::collections::HashMap;

use crate::model::{JobEntry, ResumeRecord};

use super::{assemble, collect_counts, collect_warnings, personal_info, sectionize, sections, work_experience};

fn lines(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

const FULL_RESUME: &str = "\
JASON ROSS
jason@example.com
555-123-4567
San Francisco, CA 94102
https://linkedin.com/in/jasonross

Summary
Seasoned systems engineer.

Professional Experience
Acme Corp
Senior Engineer 2020 - Present
Built highly available ingest services

Widget Inc
Software Engineer Jan 2016 - Dec 2019
Maintained the widget pipeline

Education
State University
BS Computer Science
Graduated 2019

Technical Skills
Rust, Python; Go|TypeScript
";

#[test]
fn sectionize_routes_lines_under_recognized_headers() {
    let section_lines = sectionize::sectionize(FULL_RESUME);

    assert_eq!(section_lines["header"].len(), 5);
    assert_eq!(section_lines["summary"], lines(&["Seasoned systems engineer."]));
    assert_eq!(section_lines["workExperience"].len(), 6);
    assert_eq!(
        section_lines["education"],
        lines(&["State University", "BS Computer Science", "Graduated 2019"])
    );
    assert_eq!(
        section_lines["skills"],
        lines(&["Rust, Python; Go|TypeScript"])
    );
}

#[test]
fn sectionize_without_headers_keeps_everything_in_header() {
    let section_lines = sectionize::sectionize("Jane Doe\njane@example.com\n\nBuilt things\n");

    assert_eq!(
        section_lines["header"],
        lines(&["Jane Doe", "jane@example.com", "Built things"])
    );
    assert!(section_lines["summary"].is_empty());
    assert!(section_lines["workExperience"].is_empty());
    assert!(section_lines["education"].is_empty());
    assert!(section_lines["skills"].is_empty());
}

#[test]
fn sectionize_never_emits_header_lines_as_content() {
    let section_lines = sectionize::sectionize("Skills\nRust\n");

    assert_eq!(section_lines["skills"], lines(&["Rust"]));
    assert!(section_lines["header"].is_empty());
}

#[test]
fn sectionize_ignores_keyword_matches_in_long_body_lines() {
    let long_line =
        "experience with distributed systems, storage engines, and large scale ingestion";
    assert!(long_line.len() >= 50);

    let section_lines = sectionize::sectionize(long_line);

    assert_eq!(section_lines["header"], lines(&[long_line]));
    assert!(section_lines["workExperience"].is_empty());
}

#[test]
fn sectionize_maps_synonym_headers_to_the_same_bucket() {
    let section_lines = sectionize::sectionize("Objective\nShip good software\nWork History\nAcme\n");

    assert_eq!(section_lines["summary"], lines(&["Ship good software"]));
    assert_eq!(section_lines["workExperience"], lines(&["Acme"]));
}

#[test]
fn personal_info_extracts_contact_fields() {
    let header = lines(&[
        "JASON ROSS",
        "jason@example.com",
        "555-123-4567",
        "San Francisco, CA 94102",
    ]);

    let info = personal_info::extract_personal_info(&header);

    assert_eq!(info.full_name, "JASON ROSS");
    assert_eq!(info.email, "jason@example.com");
    assert_eq!(info.phone, "555-123-4567");
    assert_eq!(info.city, "San Francisco");
    assert_eq!(info.state, "CA");
    assert_eq!(info.zip_code.as_deref(), Some("94102"));
}

#[test]
fn personal_info_name_skips_contactlike_lines() {
    let header = lines(&["555-123-4567", "jane@example.com", "JANE DOE"]);

    let info = personal_info::extract_personal_info(&header);

    assert_eq!(info.full_name, "JANE DOE");
}

#[test]
fn personal_info_name_falls_back_to_first_line() {
    let header = lines(&["Jane Doe", "jane@example.com"]);

    let info = personal_info::extract_personal_info(&header);

    assert_eq!(info.full_name, "Jane Doe");
}

#[test]
fn personal_info_classifies_links() {
    let header = lines(&[
        "JANE DOE",
        "https://www.linkedin.com/in/janedoe",
        "https://github.com/janedoe",
        "https://janedoe.com/portfolio",
    ]);

    let info = personal_info::extract_personal_info(&header);

    assert_eq!(
        info.linked_in.as_deref(),
        Some("https://www.linkedin.com/in/janedoe")
    );
    assert_eq!(info.github.as_deref(), Some("https://github.com/janedoe"));
    assert_eq!(info.website.as_deref(), Some("https://janedoe.com/portfolio"));
}

#[test]
fn personal_info_extracts_street_address_line() {
    let header = lines(&["JANE DOE", "Austin, TX 78701", "123 Main St"]);

    let info = personal_info::extract_personal_info(&header);

    assert_eq!(info.address.as_deref(), Some("123 Main St"));
    assert_eq!(info.city, "Austin");
    assert_eq!(info.state, "TX");
    assert_eq!(info.zip_code.as_deref(), Some("78701"));
}

#[test]
fn personal_info_missing_fields_stay_at_defaults() {
    let info = personal_info::extract_personal_info(&[]);

    assert!(info.full_name.is_empty());
    assert!(info.email.is_empty());
    assert!(info.phone.is_empty());
    assert!(info.city.is_empty());
    assert!(info.state.is_empty());
    assert!(info.address.is_none());
    assert!(info.zip_code.is_none());
    assert!(info.linked_in.is_none());
    assert!(info.github.is_none());
    assert!(info.website.is_none());
}

#[test]
fn work_experience_anchors_a_single_entry() {
    let jobs = work_experience::extract_work_experience(&lines(&[
        "Acme Corp",
        "Senior Engineer 2020 - Present",
        "Built things",
    ]));

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].company, "Acme Corp");
    assert_eq!(jobs[0].position, "Senior Engineer");
    assert_eq!(jobs[0].start_date, "2020");
    assert_eq!(jobs[0].end_date, "Present");
    assert!(jobs[0].current);
    assert_eq!(jobs[0].description, "Built things");
}

#[test]
fn work_experience_segments_on_every_date_anchor() {
    let jobs = work_experience::extract_work_experience(&lines(&[
        "Acme Corp",
        "Senior Engineer | Platform 2020 - Present",
        "Built the platform",
        "Widget Inc",
        "Engineer Jan 2016 - Dec 2019",
        "Did widget work",
        "Shipped more widgets",
    ]));

    assert_eq!(jobs.len(), 2);

    assert_eq!(jobs[0].company, "Acme Corp");
    assert_eq!(jobs[0].position, "Senior Engineer");
    assert_eq!(jobs[0].description, "Built the platform");
    assert!(jobs[0].current);

    assert_eq!(jobs[1].company, "Widget Inc");
    assert_eq!(jobs[1].position, "Engineer");
    assert_eq!(jobs[1].start_date, "Jan 2016");
    assert_eq!(jobs[1].end_date, "Dec 2019");
    assert!(!jobs[1].current);
    assert_eq!(jobs[1].description, "Did widget work\nShipped more widgets");
}

#[test]
fn work_experience_company_line_is_not_left_in_previous_description() {
    let jobs = work_experience::extract_work_experience(&lines(&[
        "Acme Corp",
        "Senior Engineer 2020 - Present",
        "Built the platform",
        "Widget Inc",
        "Engineer 2014 - 2016",
        "Did widget work",
    ]));

    assert_eq!(jobs.len(), 2);
    assert!(!jobs[0].description.contains("Widget Inc"));
    assert_eq!(jobs[1].company, "Widget Inc");
}

#[test]
fn work_experience_accepts_slash_dates_on_both_sides_of_the_range() {
    let jobs = work_experience::extract_work_experience(&lines(&[
        "Globex",
        "Sr. Software Engineer | 01/2020 - 01/2023",
        "Owned billing",
    ]));

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].company, "Globex");
    assert_eq!(jobs[0].position, "Sr. Software Engineer");
    assert_eq!(jobs[0].start_date, "01/2020");
    assert_eq!(jobs[0].end_date, "01/2023");
    assert!(!jobs[0].current);
}

#[test]
fn work_experience_without_any_anchor_yields_nothing() {
    let jobs = work_experience::extract_work_experience(&lines(&[
        "Acme Corp",
        "Senior Engineer",
        "Built things",
        "More things",
    ]));

    assert!(jobs.is_empty());
}

#[test]
fn work_experience_fallback_builds_one_entry_from_the_first_lines() {
    let date_range = work_experience::date_range_regex().unwrap();
    let jobs = work_experience::fallback_single_entry(
        &lines(&["Acme Corp", "2019 - 2021", "Kept the lights on", "And more"]),
        &date_range,
    );

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].company, "Acme Corp");
    assert_eq!(jobs[0].position, "N/A");
    assert_eq!(jobs[0].start_date, "2019");
    assert_eq!(jobs[0].end_date, "2021");
    assert_eq!(jobs[0].description, "Kept the lights on\nAnd more");
}

#[test]
fn work_experience_fallback_requires_a_date_on_the_second_line() {
    let date_range = work_experience::date_range_regex().unwrap();
    let jobs = work_experience::fallback_single_entry(
        &lines(&["Acme Corp", "Senior Engineer", "Built things"]),
        &date_range,
    );

    assert!(jobs.is_empty());
}

#[test]
fn education_uses_positional_lines() {
    let entries = sections::extract_education(&lines(&[
        "State University",
        "BS Computer Science",
        "Graduated 2019",
    ]));

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].institution, "State University");
    assert_eq!(entries[0].degree, "BS Computer Science");
    assert_eq!(entries[0].graduation_date, "2019");
    assert!(entries[0].field.is_none());
    assert!(entries[0].gpa.is_none());
}

#[test]
fn education_defaults_missing_degree_and_date() {
    let entries = sections::extract_education(&lines(&["State University"]));

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].degree, "N/A");
    assert_eq!(entries[0].graduation_date, "N/A");
}

#[test]
fn education_without_lines_produces_no_entry() {
    assert!(sections::extract_education(&[]).is_empty());
}

#[test]
fn skills_split_on_every_delimiter() {
    let skills = sections::extract_skills(&lines(&["JavaScript, Python; Go|Rust"]));

    assert_eq!(skills, lines(&["JavaScript", "Python", "Go", "Rust"]));
}

#[test]
fn skills_drop_single_character_tokens() {
    let skills = sections::extract_skills(&lines(&["C, C++, R, Go"]));

    assert_eq!(skills, lines(&["C++", "Go"]));
}

#[test]
fn summary_joins_lines_with_spaces() {
    let summary = sections::extract_summary(&lines(&["Seasoned engineer.", "Ships software."]));

    assert_eq!(summary.as_deref(), Some("Seasoned engineer. Ships software."));
}

#[test]
fn summary_of_nothing_is_absent() {
    assert!(sections::extract_summary(&[]).is_none());
}

#[test]
fn assemble_sorts_current_jobs_before_dated_ones() {
    let mut section_lines = HashMap::new();
    section_lines.insert(
        "workExperience".to_string(),
        lines(&[
            "Old Corp",
            "Engineer 2010 - 2019",
            "Did old things",
            "New Corp",
            "Senior Engineer 2005 - Present",
            "Leading now",
        ]),
    );

    let record = assemble::assemble(&section_lines);

    assert_eq!(record.work_experience.len(), 2);
    assert_eq!(record.work_experience[0].company, "New Corp");
    assert!(record.work_experience[0].current);
    assert_eq!(record.work_experience[1].company, "Old Corp");
}

#[test]
fn assemble_sort_is_stable_for_equal_end_dates() {
    let mut section_lines = HashMap::new();
    section_lines.insert(
        "workExperience".to_string(),
        lines(&[
            "A Corp",
            "Developer 2015 - 2019",
            "First listed",
            "B Corp",
            "Developer 2016 - 2019",
            "Second listed",
        ]),
    );

    let record = assemble::assemble(&section_lines);

    assert_eq!(record.work_experience[0].company, "A Corp");
    assert_eq!(record.work_experience[1].company, "B Corp");
}

#[test]
fn assemble_orders_month_and_slash_end_dates_by_recency() {
    let mut section_lines = HashMap::new();
    section_lines.insert(
        "workExperience".to_string(),
        lines(&[
            "Early Corp",
            "Engineer 2012 - Dec 2022",
            "x",
            "Late Corp",
            "Engineer 2023 - 01/2023",
            "y",
            "Bare Corp",
            "Engineer 2020 - 2022",
            "z",
        ]),
    );

    let record = assemble::assemble(&section_lines);

    let companies: Vec<&str> = record
        .work_experience
        .iter()
        .map(|job| job.company.as_str())
        .collect();
    assert_eq!(companies, vec!["Late Corp", "Early Corp", "Bare Corp"]);
}

#[test]
fn assemble_with_no_sections_yields_an_empty_record() {
    let record = assemble::assemble(&HashMap::new());

    assert_eq!(record, ResumeRecord::default());
    assert!(record.certifications.is_empty());
    assert!(record.summary.is_none());
}

#[test]
fn parse_resume_text_end_to_end() {
    let record = assemble::parse_resume_text(FULL_RESUME);

    assert_eq!(record.personal_info.full_name, "JASON ROSS");
    assert_eq!(record.personal_info.email, "jason@example.com");
    assert_eq!(record.personal_info.city, "San Francisco");
    assert!(record.personal_info.linked_in.is_some());

    assert_eq!(record.work_experience.len(), 2);
    assert_eq!(record.work_experience[0].company, "Acme Corp");
    assert!(record.work_experience[0].current);
    assert_eq!(record.work_experience[1].company, "Widget Inc");

    assert_eq!(record.education.len(), 1);
    assert_eq!(record.education[0].institution, "State University");

    assert_eq!(record.skills, lines(&["Rust", "Python", "Go", "TypeScript"]));
    assert_eq!(record.summary.as_deref(), Some("Seasoned systems engineer."));
    assert!(record.certifications.is_empty());
}

#[test]
fn resume_record_round_trips_through_json() {
    let record = assemble::parse_resume_text(FULL_RESUME);

    let serialized = serde_json::to_string(&record).unwrap();
    let restored: ResumeRecord = serde_json::from_str(&serialized).unwrap();

    assert_eq!(restored, record);
}

#[test]
fn record_json_uses_the_extension_field_names() {
    let record = assemble::parse_resume_text(FULL_RESUME);
    let value = serde_json::to_value(&record).unwrap();

    assert!(value.get("personalInfo").is_some());
    assert!(value["personalInfo"].get("fullName").is_some());
    assert!(value.get("workExperience").is_some());
    assert!(value["workExperience"][0].get("startDate").is_some());
}

#[test]
fn counts_and_warnings_reflect_an_unsectioned_resume() {
    let raw_text = "Jane Doe\njane@example.com\n";
    let section_lines = sectionize::sectionize(raw_text);
    let record = assemble::assemble(&section_lines);

    let counts = collect_counts(raw_text, &section_lines, &record);
    assert_eq!(counts.raw_line_count, 2);
    assert_eq!(counts.header_line_count, 2);
    assert_eq!(counts.job_entry_count, 0);

    let warnings = collect_warnings(&counts, &record);
    assert!(
        warnings
            .iter()
            .any(|warning| warning.contains("no section headers recognized"))
    );
}

#[test]
fn sort_keeps_current_jobs_first_regardless_of_dates() {
    let job = |company: &str, end_date: &str, current: bool| JobEntry {
        company: company.to_string(),
        position: "Engineer".to_string(),
        start_date: "2010".to_string(),
        end_date: end_date.to_string(),
        description: String::new(),
        current,
    };

    let mut jobs = vec![
        job("Dated", "2019", false),
        job("Ongoing", "Present", true),
        job("Recent", "Jun 2024", false),
    ];

    assemble::sort_most_recent_first(&mut jobs);

    let companies: Vec<&str> = jobs.iter().map(|entry| entry.company.as_str()).collect();
    assert_eq!(companies, vec!["Ongoing", "Recent", "Dated"]);
}
