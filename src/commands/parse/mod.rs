use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result};
use chrono::Utc;
use regex::Regex;
use tracing::{info, warn};

use crate::cli::ParseArgs;
use crate::model::{ParseCounts, ParseRunManifest, ResumeRecord};
use crate::util::{now_utc_string, sha256_file, utc_compact_string, write_json_pretty};

mod assemble;
mod personal_info;
mod sectionize;
mod sections;
#[cfg(test)]
mod tests;
mod work_experience;

const MANIFEST_VERSION: u32 = 1;

pub fn run(args: ParseArgs) -> Result<()> {
    let started_ts = Utc::now();
    let started_at = now_utc_string();
    let run_id = format!("run-{}", utc_compact_string(started_ts));

    let raw_text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read resume text: {}", args.input.display()))?;
    let source_sha256 = sha256_file(&args.input)?;

    let section_lines = sectionize::sectionize(&raw_text);
    let record = assemble::assemble(&section_lines);
    let counts = collect_counts(&raw_text, &section_lines, &record);
    let warnings = collect_warnings(&counts, &record);

    for warning in &warnings {
        warn!(warning = %warning, "parse warning");
    }

    info!(
        run_id = %run_id,
        source = %args.input.display(),
        jobs = counts.job_entry_count,
        education_entries = counts.education_entry_count,
        skills = counts.skill_count,
        "resume text parsed"
    );

    if args.dry_run {
        info!("dry-run requested; skipping artifact writes");
        return Ok(());
    }

    let record_path = args
        .record_path
        .unwrap_or_else(|| args.cache_root.join("resume_record.json"));
    let manifest_path = args
        .manifest_path
        .unwrap_or_else(|| args.cache_root.join("manifests").join("parse_run.json"));

    write_json_pretty(&record_path, &record)?;
    info!(path = %record_path.display(), "wrote resume record");

    let manifest = ParseRunManifest {
        manifest_version: MANIFEST_VERSION,
        run_id,
        status: "completed".to_string(),
        started_at,
        updated_at: now_utc_string(),
        source_path: args.input.display().to_string(),
        source_sha256,
        record_path: record_path.display().to_string(),
        counts,
        warnings,
    };

    write_json_pretty(&manifest_path, &manifest)?;
    info!(path = %manifest_path.display(), "wrote parse-run manifest");

    Ok(())
}

// Shared by the extractors: pattern compilation failure degrades to "no
// match" instead of surfacing an error, keeping the pipeline infallible.
fn compile_pattern(pattern: &str) -> Option<Regex> {
    Regex::new(pattern).ok()
}

fn collect_counts(
    raw_text: &str,
    section_lines: &HashMap<String, Vec<String>>,
    record: &ResumeRecord,
) -> ParseCounts {
    let section_len = |name: &str| section_lines.get(name).map(Vec::len).unwrap_or(0);
    let link_count = [
        record.personal_info.linked_in.is_some(),
        record.personal_info.github.is_some(),
        record.personal_info.website.is_some(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count();

    ParseCounts {
        raw_line_count: raw_text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .count(),
        header_line_count: section_len(sectionize::HEADER_SECTION),
        summary_line_count: section_len(sectionize::SUMMARY_SECTION),
        work_experience_line_count: section_len(sectionize::WORK_EXPERIENCE_SECTION),
        education_line_count: section_len(sectionize::EDUCATION_SECTION),
        skills_line_count: section_len(sectionize::SKILLS_SECTION),
        job_entry_count: record.work_experience.len(),
        education_entry_count: record.education.len(),
        skill_count: record.skills.len(),
        link_count,
    }
}

fn collect_warnings(counts: &ParseCounts, record: &ResumeRecord) -> Vec<String> {
    let mut warnings = Vec::new();

    let recognized_lines = counts.summary_line_count
        + counts.work_experience_line_count
        + counts.education_line_count
        + counts.skills_line_count;
    if recognized_lines == 0 && counts.header_line_count > 0 {
        warnings.push("no section headers recognized; all lines kept in header".to_string());
    }

    if record.personal_info.full_name.is_empty() {
        warnings.push("full name not found in header".to_string());
    }
    if record.personal_info.email.is_empty() {
        warnings.push("email not found in header".to_string());
    }
    if counts.work_experience_line_count > 0 && counts.job_entry_count == 0 {
        warnings.push("experience section present but no job entries extracted".to_string());
    }
    if counts.education_line_count > 0 && counts.education_entry_count == 0 {
        warnings.push("education section present but no entries extracted".to_string());
    }

    warnings
}
