use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Review pipeline of one application, distinct from the job's moderation
/// lifecycle. Every application starts `pending`; employers advance it
/// through the other states. `pending` itself is never a settable target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Shortlisted,
    Interviewed,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Interviewed => "interviewed",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ApplicationStatus::Pending),
            "reviewed" => Some(ApplicationStatus::Reviewed),
            "shortlisted" => Some(ApplicationStatus::Shortlisted),
            "interviewed" => Some(ApplicationStatus::Interviewed),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }

    /// The states an employer may move an application into.
    pub fn parse_settable(s: &str) -> Option<Self> {
        match Self::parse(s) {
            Some(ApplicationStatus::Pending) | None => None,
            other => other,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    /// JobSeekerProfile id, not the user id.
    pub seeker_id: Uuid,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// One row of a seeker's application history, joined with the parent job.
#[derive(Debug, Clone, Serialize)]
pub struct SeekerApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub job_location: String,
    pub company_logo: Option<String>,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// One applicant row as the job owner sees it, joined through the seeker
/// profile to the account email.
#[derive(Debug, Clone, Serialize)]
pub struct JobApplicantRow {
    pub id: Uuid,
    pub seeker_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// Internal projection for ownership checks and notifications.
#[derive(Debug, Clone)]
pub struct ApplicationDetail {
    pub id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub employer_id: Uuid,
    pub applicant_email: String,
}
