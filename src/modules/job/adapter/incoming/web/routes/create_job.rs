use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::EmployerUser;
use crate::modules::job::application::use_cases::create_job::{
    CreateJobError, CreateJobInput, LogoUpload,
};
use crate::shared::api::ApiResponse;
use crate::shared::web::multipart::{read_form, MultipartFormError, ParsedForm};
use crate::AppState;

/// Builds the typed posting input out of a parsed multipart form. Shared
/// between the create and update handlers, which accept the same fields.
pub(crate) fn job_input_from_form(form: &ParsedForm) -> Result<CreateJobInput, HttpResponse> {
    let text = |name: &str| form.text(name).unwrap_or_default().to_string();

    let salary = |name: &str| -> Result<Option<i64>, HttpResponse> {
        match form.text(name) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse::<i64>().map(Some).map_err(|_| {
                ApiResponse::bad_request("INVALID_SALARY_RANGE", "Salary values must be integers")
            }),
        }
    };

    Ok(CreateJobInput {
        title: text("title"),
        description: text("description"),
        location: text("location"),
        work_type: text("work_type"),
        job_type: text("job_type"),
        experience_level: text("experience_level"),
        industry: text("industry"),
        salary_min: salary("salary_min")?,
        salary_max: salary("salary_max")?,
        logo: form.file("logo").map(|f| LogoUpload {
            filename: f.filename.clone(),
            bytes: f.bytes.clone(),
        }),
    })
}

pub(crate) fn multipart_error_response(e: MultipartFormError) -> HttpResponse {
    match e {
        MultipartFormError::FileTooLarge(field) => ApiResponse::bad_request(
            "FILE_TOO_LARGE",
            &format!("File field '{}' exceeds the upload size limit", field),
        ),
        e => ApiResponse::bad_request("INVALID_MULTIPART", &e.to_string()),
    }
}

#[post("/api/jobs")]
pub async fn create_job_handler(
    user: EmployerUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = match read_form(payload).await {
        Ok(form) => form,
        Err(e) => return multipart_error_response(e),
    };

    let input = match job_input_from_form(&form) {
        Ok(input) => input,
        Err(resp) => return resp,
    };

    match data.jobs.create.execute(user.user_id, input).await {
        Ok(job) => ApiResponse::created(job),

        Err(CreateJobError::MissingField(name)) => ApiResponse::bad_request(
            "MISSING_FIELD",
            &format!("Field '{}' must not be empty", name),
        ),

        Err(CreateJobError::InvalidSalaryRange) => ApiResponse::bad_request(
            "INVALID_SALARY_RANGE",
            "salary_min must not exceed salary_max",
        ),

        Err(CreateJobError::RepositoryError(e)) => {
            error!("Failed to create job: {}", e);
            ApiResponse::internal_error()
        }
    }
}
