use serde::{Deserialize, Serialize};

// Record types serialize as camelCase so the JSON matches the shape the
// browser extension stores and the page-side filler consumes.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEntry {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub graduation_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

/// Never produced by the pipeline; the slot exists so manually entered
/// certifications round-trip through the same record shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub certification_name: String,
    pub acquired_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_of_expertise: Option<String>,
}

/// Structured output of one parse run. Built fresh per input text, immutable
/// afterwards; downstream code replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub work_experience: Vec<JobEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<Certification>,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// One form control as reported by the page-side detector. `element` is an
/// opaque handle assigned by the detector; the matcher never interprets it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    #[serde(default)]
    pub element: String,
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

/// A proposed fill. `mapped_to` is a dot-path into the resume record and
/// `value` is the resolved text, never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    pub field: FormField,
    pub mapped_to: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseCounts {
    pub raw_line_count: usize,
    pub header_line_count: usize,
    pub summary_line_count: usize,
    pub work_experience_line_count: usize,
    pub education_line_count: usize,
    pub skills_line_count: usize,
    pub job_entry_count: usize,
    pub education_entry_count: usize,
    pub skill_count: usize,
    pub link_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRunManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub status: String,
    pub started_at: String,
    pub updated_at: String,
    pub source_path: String,
    pub source_sha256: String,
    pub record_path: String,
    pub counts: ParseCounts,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillRunManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub generated_at: String,
    pub record_path: String,
    pub fields_path: String,
    pub field_count: usize,
    pub mapping_count: usize,
    pub skipped_field_count: usize,
    pub mappings: Vec<FieldMapping>,
}
