use serde::Deserialize;

use crate::domain::deadline::{normalize_date, NOT_SPECIFIED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    OpenForApplication,
    InProcess,
    Completed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 3] = [
        JobStatus::OpenForApplication,
        JobStatus::InProcess,
        JobStatus::Completed,
    ];

    /// Stored and displayed form.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::OpenForApplication => "Open for Application",
            JobStatus::InProcess => "In Process",
            JobStatus::Completed => "Completed",
        }
    }

    /// Form/query-string form.
    pub fn slug(&self) -> &'static str {
        match self {
            JobStatus::OpenForApplication => "open-for-application",
            JobStatus::InProcess => "in-process",
            JobStatus::Completed => "completed",
        }
    }

    pub fn from_slug(slug: &str) -> Option<JobStatus> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }

    pub fn from_str(value: &str) -> Option<JobStatus> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Flat key-value mapping the extraction model returns. Every key is
/// optional on the wire; absent keys deserialize to empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExtractedJob {
    pub company_name: String,
    pub offer_type: String,
    pub stipend: String,
    pub ctc: String,
    pub eligibility: String,
    pub branches: String,
    pub role: String,
    pub recruitment_process: String,
    pub application_deadline: String,
    pub form_link: String,
    pub poc_name: String,
    pub poc_phone: String,
}

/// A record ready for insertion: defaults applied, deadline canonicalized.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub company_name: String,
    pub offer_type: String,
    pub stipend: String,
    pub ctc: String,
    pub eligibility: String,
    pub branches: String,
    pub role: String,
    pub recruitment_process: String,
    pub application_deadline: String,
    pub form_link: String,
    pub poc_name: String,
    pub poc_phone: String,
    pub status: JobStatus,
    pub completion_notes: String,
}

fn or_not_specified(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        value.to_string()
    }
}

impl NewJob {
    pub fn from_extracted(details: &ExtractedJob) -> NewJob {
        NewJob {
            company_name: details.company_name.trim().to_string(),
            offer_type: details.offer_type.trim().to_string(),
            stipend: or_not_specified(&details.stipend),
            ctc: or_not_specified(&details.ctc),
            eligibility: details.eligibility.trim().to_string(),
            branches: details.branches.trim().to_string(),
            role: details.role.trim().to_string(),
            recruitment_process: details.recruitment_process.trim().to_string(),
            application_deadline: normalize_date(&details.application_deadline),
            form_link: details.form_link.trim().to_string(),
            poc_name: or_not_specified(&details.poc_name),
            poc_phone: or_not_specified(&details.poc_phone),
            status: JobStatus::OpenForApplication,
            completion_notes: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_slug_round_trip() {
        for status in JobStatus::ALL {
            assert_eq!(JobStatus::from_slug(status.slug()), Some(status));
            assert_eq!(JobStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(JobStatus::from_slug("all"), None);
        assert_eq!(JobStatus::from_str("Applied"), None);
    }

    #[test]
    fn extracted_job_tolerates_missing_keys() {
        let details: ExtractedJob =
            serde_json::from_str(r#"{"company_name": "Acme", "role": "SDE"}"#).unwrap();
        assert_eq!(details.company_name, "Acme");
        assert_eq!(details.role, "SDE");
        assert_eq!(details.stipend, "");
        assert_eq!(details.application_deadline, "");
    }

    #[test]
    fn new_job_applies_defaults_and_normalizes_deadline() {
        let details = ExtractedJob {
            company_name: " Acme ".to_string(),
            offer_type: "Intern + FTE".to_string(),
            application_deadline: "Apply by 12.08.25".to_string(),
            ..ExtractedJob::default()
        };
        let job = NewJob::from_extracted(&details);

        assert_eq!(job.company_name, "Acme");
        assert_eq!(job.application_deadline, "12-08-2025");
        assert_eq!(job.stipend, "Not Specified");
        assert_eq!(job.ctc, "Not Specified");
        assert_eq!(job.poc_name, "Not Specified");
        assert_eq!(job.poc_phone, "Not Specified");
        assert_eq!(job.status, JobStatus::OpenForApplication);
        assert_eq!(job.completion_notes, "");
    }

    #[test]
    fn new_job_keeps_unparseable_deadline_empty() {
        let details = ExtractedJob {
            company_name: "Acme".to_string(),
            application_deadline: "rolling basis".to_string(),
            ..ExtractedJob::default()
        };
        let job = NewJob::from_extracted(&details);
        assert_eq!(job.application_deadline, "");
    }
}
