use crate::model::ResumeRecord;

/// One keyword group with its target path and value resolver. The table is
/// evaluated top to bottom and the first group with a keyword hit wins, so
/// specific groups ("first name") must precede generic ones ("name").
pub(super) struct MatchRule {
    pub(super) keywords: &'static [&'static str],
    pub(super) mapped_to: &'static str,
    pub(super) resolve: fn(&ResumeRecord) -> String,
}

pub(super) const MATCH_RULES: &[MatchRule] = &[
    MatchRule {
        keywords: &["first name", "firstname", "given name"],
        mapped_to: "personalInfo.firstName",
        resolve: first_name,
    },
    MatchRule {
        keywords: &["last name", "lastname", "surname", "family name"],
        mapped_to: "personalInfo.lastName",
        resolve: last_name,
    },
    MatchRule {
        keywords: &["full name", "fullname", "name"],
        mapped_to: "personalInfo.fullName",
        resolve: |record| record.personal_info.full_name.clone(),
    },
    MatchRule {
        keywords: &["email", "e-mail", "mail"],
        mapped_to: "personalInfo.email",
        resolve: |record| record.personal_info.email.clone(),
    },
    MatchRule {
        keywords: &["phone", "telephone", "mobile", "cell"],
        mapped_to: "personalInfo.phone",
        resolve: |record| record.personal_info.phone.clone(),
    },
    MatchRule {
        keywords: &["address", "street"],
        mapped_to: "personalInfo.address",
        resolve: |record| optional(record.personal_info.address.as_ref()),
    },
    MatchRule {
        keywords: &["city", "town"],
        mapped_to: "personalInfo.city",
        resolve: |record| record.personal_info.city.clone(),
    },
    MatchRule {
        keywords: &["state", "province", "region"],
        mapped_to: "personalInfo.state",
        resolve: |record| record.personal_info.state.clone(),
    },
    MatchRule {
        keywords: &["zip", "postal", "postcode", "zip code", "postal code"],
        mapped_to: "personalInfo.zipCode",
        resolve: |record| optional(record.personal_info.zip_code.as_ref()),
    },
    MatchRule {
        keywords: &["country"],
        mapped_to: "personalInfo.country",
        resolve: |record| optional(record.personal_info.country.as_ref()),
    },
    MatchRule {
        keywords: &["linkedin", "linked in", "linkedin url"],
        mapped_to: "personalInfo.linkedIn",
        resolve: |record| optional(record.personal_info.linked_in.as_ref()),
    },
    MatchRule {
        keywords: &["website", "portfolio", "url"],
        mapped_to: "personalInfo.website",
        resolve: |record| optional(record.personal_info.website.as_ref()),
    },
    MatchRule {
        keywords: &["company", "employer", "organization", "current company"],
        mapped_to: "workExperience.company",
        resolve: |record| {
            most_recent_job(record, |job| job.company.clone())
        },
    },
    MatchRule {
        keywords: &["position", "title", "job title", "role", "current position"],
        mapped_to: "workExperience.position",
        resolve: |record| {
            most_recent_job(record, |job| job.position.clone())
        },
    },
    MatchRule {
        keywords: &["school", "university", "college", "institution"],
        mapped_to: "education.institution",
        resolve: |record| most_recent_education(record, |entry| entry.institution.clone()),
    },
    MatchRule {
        keywords: &["degree", "qualification"],
        mapped_to: "education.degree",
        resolve: |record| most_recent_education(record, |entry| entry.degree.clone()),
    },
    MatchRule {
        keywords: &["major", "field of study", "study", "specialization"],
        mapped_to: "education.field",
        resolve: |record| {
            most_recent_education(record, |entry| optional(entry.field.as_ref()))
        },
    },
    MatchRule {
        keywords: &["gpa"],
        mapped_to: "education.gpa",
        resolve: |record| most_recent_education(record, |entry| optional(entry.gpa.as_ref())),
    },
    MatchRule {
        keywords: &["skills", "skill"],
        mapped_to: "skills",
        resolve: |record| record.skills.join(", "),
    },
    MatchRule {
        keywords: &[
            "summary",
            "about",
            "bio",
            "cover letter",
            "objective",
            "introduction",
        ],
        mapped_to: "summary",
        resolve: |record| optional(record.summary.as_ref()),
    },
];

fn first_name(record: &ResumeRecord) -> String {
    record
        .personal_info
        .full_name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

fn last_name(record: &ResumeRecord) -> String {
    record
        .personal_info
        .full_name
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .to_string()
}

fn optional(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn most_recent_job(record: &ResumeRecord, extract: fn(&crate::model::JobEntry) -> String) -> String {
    record
        .work_experience
        .first()
        .map(extract)
        .unwrap_or_default()
}

fn most_recent_education(
    record: &ResumeRecord,
    extract: fn(&crate::model::EducationEntry) -> String,
) -> String {
    record.education.first().map(extract).unwrap_or_default()
}
