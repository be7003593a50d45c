use actix_multipart::Multipart;
use actix_web::http::StatusCode;
use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::applications::application::use_cases::apply_to_job::{
    ApplyToJobError, ApplyToJobInput, ResumeUpload, PROFILE_REDIRECT_HINT,
};
use crate::modules::auth::adapter::incoming::web::extractors::auth::JobSeekerUser;
use crate::modules::job::adapter::incoming::web::routes::create_job::multipart_error_response;
use crate::shared::api::ApiResponse;
use crate::shared::web::multipart::read_form;
use crate::AppState;

#[post("/api/jobs/{id}/apply")]
pub async fn apply_to_job_handler(
    user: JobSeekerUser,
    path: web::Path<Uuid>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();

    let form = match read_form(payload).await {
        Ok(form) => form,
        Err(e) => return multipart_error_response(e),
    };

    let input = ApplyToJobInput {
        cover_letter: form.text("cover_letter").map(|s| s.to_string()),
        resume_file: form.file("resume").map(|f| ResumeUpload {
            filename: f.filename.clone(),
            bytes: f.bytes.clone(),
        }),
        resume_url: form.text("resume_url").map(|s| s.to_string()),
    };

    match data.applications.apply.execute(user.user_id, job_id, input).await {
        Ok(submitted) => ApiResponse::created(submitted),

        Err(ApplyToJobError::ProfileRequired) => ApiResponse::error_with_hint(
            StatusCode::BAD_REQUEST,
            "PROFILE_REQUIRED",
            "Create a job seeker profile before applying",
            PROFILE_REDIRECT_HINT,
        ),

        Err(ApplyToJobError::JobNotFound) => {
            ApiResponse::not_found("JOB_NOT_FOUND", "Job not found")
        }

        Err(ApplyToJobError::DuplicateApplication) => ApiResponse::conflict(
            "DUPLICATE_APPLICATION",
            "You have already applied to this job",
        ),

        Err(ApplyToJobError::RepositoryError(e)) => {
            error!("Failed to submit application: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::Value;
    use std::sync::Arc;

    use crate::modules::applications::application::domain::entities::Application;
    use crate::modules::applications::application::domain::ApplicationStatus;
    use crate::modules::applications::application::use_cases::apply_to_job::{
        IApplyToJobUseCase, SubmittedApplication,
    };
    use crate::modules::auth::application::domain::entities::Role;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper;

    struct MockApply {
        result: Result<SubmittedApplication, ApplyToJobError>,
    }

    #[async_trait]
    impl IApplyToJobUseCase for MockApply {
        async fn execute(
            &self,
            _user_id: Uuid,
            _job_id: Uuid,
            _input: ApplyToJobInput,
        ) -> Result<SubmittedApplication, ApplyToJobError> {
            self.result.clone()
        }
    }

    fn submitted() -> SubmittedApplication {
        SubmittedApplication {
            application: Application {
                id: Uuid::new_v4(),
                job_id: Uuid::new_v4(),
                seeker_id: Uuid::new_v4(),
                cover_letter: Some("I build services".to_string()),
                resume_url: Some("https://storage.test/upload/resumes/cv.pdf".to_string()),
                status: ApplicationStatus::Pending,
                applied_at: Utc::now(),
            },
            download_url: Some(
                "https://storage.test/upload/fl_attachment,resume.pdf/resumes/cv.pdf".to_string(),
            ),
        }
    }

    fn multipart_body(boundary: &str, fields: &[(&str, &str)]) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        body
    }

    fn request(boundary: &str, body: Vec<u8>, role: Role) -> actix_web::test::TestRequest {
        test::TestRequest::post()
            .uri(&format!("/api/jobs/{}/apply", Uuid::new_v4()))
            .insert_header(("Authorization", auth_helper::bearer(Uuid::new_v4(), role)))
            .insert_header((
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn test_apply_created_with_download_url() {
        let app_state = TestAppStateBuilder::default()
            .with_apply(Arc::new(MockApply {
                result: Ok(submitted()),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(auth_helper::token_provider_data())
                .service(apply_to_job_handler),
        )
        .await;

        let boundary = "test-boundary";
        let body = multipart_body(boundary, &[("cover_letter", "I build services")]);

        let resp =
            test::call_service(&app, request(boundary, body, Role::Jobseeker).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["data"]["download_url"],
            "https://storage.test/upload/fl_attachment,resume.pdf/resumes/cv.pdf"
        );
    }

    #[actix_web::test]
    async fn test_profile_required_carries_hint() {
        let app_state = TestAppStateBuilder::default()
            .with_apply(Arc::new(MockApply {
                result: Err(ApplyToJobError::ProfileRequired),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(auth_helper::token_provider_data())
                .service(apply_to_job_handler),
        )
        .await;

        let boundary = "test-boundary";
        // actix-multipart rejects zero-part bodies, so carry one empty field.
        let body = multipart_body(boundary, &[("cover_letter", "")]);

        let resp =
            test::call_service(&app, request(boundary, body, Role::Jobseeker).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROFILE_REQUIRED");
        assert_eq!(body["error"]["hint"], "/profile/seeker");
    }

    #[actix_web::test]
    async fn test_duplicate_application_conflict() {
        let app_state = TestAppStateBuilder::default()
            .with_apply(Arc::new(MockApply {
                result: Err(ApplyToJobError::DuplicateApplication),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(auth_helper::token_provider_data())
                .service(apply_to_job_handler),
        )
        .await;

        let boundary = "test-boundary";
        // actix-multipart rejects zero-part bodies, so carry one empty field.
        let body = multipart_body(boundary, &[("cover_letter", "")]);

        let resp =
            test::call_service(&app, request(boundary, body, Role::Jobseeker).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_employer_cannot_apply() {
        let app_state = TestAppStateBuilder::default()
            .with_apply(Arc::new(MockApply {
                result: Ok(submitted()),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(auth_helper::token_provider_data())
                .service(apply_to_job_handler),
        )
        .await;

        let boundary = "test-boundary";
        let body = multipart_body(boundary, &[]);

        let resp =
            test::call_service(&app, request(boundary, body, Role::Employer).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
