use serde::Deserialize;

use crate::domain::deadline::normalize_date;
use crate::domain::job::{ExtractedJob, JobStatus, NewJob};

/// One record from an export of the old tracker schema: spreadsheet-style
/// column keys and two independent status booleans instead of the single
/// tri-state status.
#[derive(Debug, Deserialize)]
pub struct LegacyJobRecord {
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(rename = "Offer Type", default)]
    pub offer_type: String,
    #[serde(rename = "Stipend", default)]
    pub stipend: String,
    #[serde(rename = "CTC", default)]
    pub ctc: String,
    #[serde(rename = "Eligibility", default)]
    pub eligibility: String,
    #[serde(rename = "Branches", default)]
    pub branches: String,
    #[serde(rename = "Role", default)]
    pub role: String,
    #[serde(rename = "Recruitment Process", default)]
    pub recruitment_process: String,
    #[serde(rename = "Application Deadline", default)]
    pub application_deadline: String,
    #[serde(rename = "Form Link", default)]
    pub form_link: String,
    #[serde(rename = "POC Name", default)]
    pub poc_name: String,
    #[serde(rename = "POC Phone", default)]
    pub poc_phone: String,
    #[serde(rename = "Applied", default)]
    pub applied: bool,
    #[serde(rename = "Completed", default)]
    pub completed: bool,
    #[serde(rename = "Completion Notes", default)]
    pub completion_notes: String,
}

/// Maps a legacy record onto the canonical schema. Completed wins over
/// Applied; neither means the posting is still open. The deadline is
/// re-normalized because older exports stored it in whatever format the
/// posting used.
pub fn migrate_legacy(record: LegacyJobRecord) -> NewJob {
    let status = if record.completed {
        JobStatus::Completed
    } else if record.applied {
        JobStatus::InProcess
    } else {
        JobStatus::OpenForApplication
    };

    let details = ExtractedJob {
        company_name: record.company_name,
        offer_type: record.offer_type,
        stipend: record.stipend,
        ctc: record.ctc,
        eligibility: record.eligibility,
        branches: record.branches,
        role: record.role,
        recruitment_process: record.recruitment_process,
        application_deadline: String::new(),
        form_link: record.form_link,
        poc_name: record.poc_name,
        poc_phone: record.poc_phone,
    };

    let mut job = NewJob::from_extracted(&details);
    job.application_deadline = normalize_date(&record.application_deadline);
    job.status = status;
    job.completion_notes = record.completion_notes;
    job
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(applied: bool, completed: bool) -> LegacyJobRecord {
        serde_json::from_value(serde_json::json!({
            "Company Name": "Acme",
            "Offer Type": "FTE",
            "Application Deadline": "2025-08-12",
            "Applied": applied,
            "Completed": completed,
        }))
        .unwrap()
    }

    #[test]
    fn booleans_map_to_tri_state() {
        assert_eq!(
            migrate_legacy(record(false, false)).status,
            JobStatus::OpenForApplication
        );
        assert_eq!(
            migrate_legacy(record(true, false)).status,
            JobStatus::InProcess
        );
        assert_eq!(
            migrate_legacy(record(false, true)).status,
            JobStatus::Completed
        );
        // Completed wins when both were ticked
        assert_eq!(
            migrate_legacy(record(true, true)).status,
            JobStatus::Completed
        );
    }

    #[test]
    fn deadline_is_renormalized_from_old_formats() {
        let job = migrate_legacy(record(false, false));
        assert_eq!(job.application_deadline, "12-08-2025");
    }

    #[test]
    fn missing_columns_get_defaults() {
        let record: LegacyJobRecord =
            serde_json::from_value(serde_json::json!({"Company Name": "Acme"})).unwrap();
        let job = migrate_legacy(record);

        assert_eq!(job.stipend, "Not Specified");
        assert_eq!(job.application_deadline, "");
        assert_eq!(job.status, JobStatus::OpenForApplication);
    }
}
