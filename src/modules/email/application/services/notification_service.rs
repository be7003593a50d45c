use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::modules::email::application::ports::outgoing::email_sender::EmailSender;
use crate::modules::job::application::domain::JobStatus;

/// Best-effort dispatcher for workflow emails. Every method logs on failure
/// and returns nothing: by the time a notification goes out the state
/// transition it describes is already committed, so a dead SMTP relay must
/// never turn that success into an error.
///
/// Constructed without a sender when SMTP is unconfigured; in that mode each
/// dispatch logs a single warning and is otherwise a no-op.
#[derive(Clone)]
pub struct NotificationService {
    sender: Option<Arc<dyn EmailSender + Send + Sync>>,
}

impl fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationService")
            .field("configured", &self.sender.is_some())
            .finish()
    }
}

impl NotificationService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    pub fn unconfigured() -> Self {
        Self { sender: None }
    }

    pub async fn job_reviewed(
        &self,
        employer_email: &str,
        job_title: &str,
        status: JobStatus,
        reason: Option<&str>,
    ) {
        let (subject, body) = match status {
            JobStatus::Approved => (
                format!("Your job posting \"{}\" was approved", job_title),
                format!(
                    "<p>Good news! Your job posting <b>{}</b> has been approved and is now publicly listed.</p>",
                    job_title
                ),
            ),
            JobStatus::Rejected => (
                format!("Your job posting \"{}\" was rejected", job_title),
                match reason {
                    Some(reason) => format!(
                        "<p>Your job posting <b>{}</b> was rejected.</p><p>Reason: {}</p><p>You can edit the posting to resubmit it for review.</p>",
                        job_title, reason
                    ),
                    None => format!(
                        "<p>Your job posting <b>{}</b> was rejected.</p><p>You can edit the posting to resubmit it for review.</p>",
                        job_title
                    ),
                },
            ),
            // Review only ever produces approved/rejected; anything else is
            // a caller bug, not worth an email.
            _ => return,
        };

        self.dispatch(employer_email, &subject, &body).await;
    }

    pub async fn application_status_changed(
        &self,
        applicant_email: &str,
        job_title: &str,
        new_status: &str,
    ) {
        let subject = format!("Update on your application for \"{}\"", job_title);
        let body = format!(
            "<p>The status of your application for <b>{}</b> has changed to <b>{}</b>.</p>",
            job_title, new_status
        );

        self.dispatch(applicant_email, &subject, &body).await;
    }

    async fn dispatch(&self, to: &str, subject: &str, body: &str) {
        let Some(sender) = &self.sender else {
            warn!("email transport not configured, dropping notification to {}", to);
            return;
        };

        if let Err(e) = sender.send_email(to, subject, body).await {
            warn!("failed to send notification to {}: {}", to, e);
        }
    }
}
