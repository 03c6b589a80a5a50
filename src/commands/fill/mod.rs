use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::cli::FillArgs;
use crate::model::{FillRunManifest, FormField, ResumeRecord};
use crate::util::{now_utc_string, read_json_file, utc_compact_string, write_json_pretty};

mod matcher;
mod rules;

const MANIFEST_VERSION: u32 = 1;

pub fn run(args: FillArgs) -> Result<()> {
    let run_id = format!("run-{}", utc_compact_string(Utc::now()));

    let record_path = args
        .record_path
        .unwrap_or_else(|| args.cache_root.join("resume_record.json"));
    let record: ResumeRecord = read_json_file(&record_path)?;
    let fields: Vec<FormField> = read_json_file(&args.fields)?;

    let mappings = matcher::match_fields(&record, &fields);
    let skipped_field_count = fields.len() - mappings.len();

    info!(
        run_id = %run_id,
        fields = fields.len(),
        mapped = mappings.len(),
        skipped = skipped_field_count,
        "field matching completed"
    );

    let output_path = args
        .output_path
        .unwrap_or_else(|| args.cache_root.join("manifests").join("fill_run.json"));

    let manifest = FillRunManifest {
        manifest_version: MANIFEST_VERSION,
        run_id,
        generated_at: now_utc_string(),
        record_path: record_path.display().to_string(),
        fields_path: args.fields.display().to_string(),
        field_count: fields.len(),
        mapping_count: mappings.len(),
        skipped_field_count,
        mappings,
    };

    write_json_pretty(&output_path, &manifest)?;
    info!(path = %output_path.display(), "wrote fill-run manifest");

    Ok(())
}
