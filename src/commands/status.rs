use anyhow::Result;
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::model::{FillRunManifest, ParseRunManifest, ResumeRecord};
use crate::util::read_json_file;

pub fn run(args: StatusArgs) -> Result<()> {
    let manifest_dir = args.cache_root.join("manifests");
    let record_path = args.cache_root.join("resume_record.json");
    let parse_manifest_path = manifest_dir.join("parse_run.json");
    let fill_manifest_path = manifest_dir.join("fill_run.json");

    info!(cache_root = %args.cache_root.display(), "status requested");

    if record_path.exists() {
        let record: ResumeRecord = read_json_file(&record_path)?;

        info!(
            full_name_found = !record.personal_info.full_name.is_empty(),
            email_found = !record.personal_info.email.is_empty(),
            phone_found = !record.personal_info.phone.is_empty(),
            city_found = !record.personal_info.city.is_empty(),
            linked_in_found = record.personal_info.linked_in.is_some(),
            job_entries = record.work_experience.len(),
            education_entries = record.education.len(),
            skills = record.skills.len(),
            has_summary = record.summary.is_some(),
            "loaded resume record"
        );
    } else {
        warn!(path = %record_path.display(), "resume record missing; run parse first");
    }

    if parse_manifest_path.exists() {
        let manifest: ParseRunManifest = read_json_file(&parse_manifest_path)?;

        info!(
            run_id = %manifest.run_id,
            status = %manifest.status,
            started_at = %manifest.started_at,
            source = %manifest.source_path,
            source_sha256 = %manifest.source_sha256,
            raw_lines = manifest.counts.raw_line_count,
            jobs = manifest.counts.job_entry_count,
            skills = manifest.counts.skill_count,
            warning_count = manifest.warnings.len(),
            "loaded parse-run manifest"
        );

        for warning in &manifest.warnings {
            warn!(warning = %warning, "parse-run warning");
        }
    } else {
        warn!(path = %parse_manifest_path.display(), "parse-run manifest missing");
    }

    if fill_manifest_path.exists() {
        let manifest: FillRunManifest = read_json_file(&fill_manifest_path)?;

        info!(
            run_id = %manifest.run_id,
            generated_at = %manifest.generated_at,
            fields = manifest.field_count,
            mapped = manifest.mapping_count,
            skipped = manifest.skipped_field_count,
            "loaded fill-run manifest"
        );
    } else {
        info!(path = %fill_manifest_path.display(), "no fill run recorded yet");
    }

    Ok(())
}
