pub mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::use_cases::delete_any_job::DeleteAnyJobUseCase;
use crate::modules::admin::application::use_cases::delete_user::DeleteUserUseCase;
use crate::modules::admin::application::use_cases::list_users::ListUsersUseCase;
use crate::modules::applications::adapter::outgoing::application_repository_postgres::ApplicationRepositoryPostgres;
use crate::modules::applications::application::application_use_cases::ApplicationUseCases;
use crate::modules::applications::application::use_cases::apply_to_job::ApplyToJobUseCase;
use crate::modules::applications::application::use_cases::get_job_applicants::GetJobApplicantsUseCase;
use crate::modules::applications::application::use_cases::get_my_applications::GetMyApplicationsUseCase;
use crate::modules::applications::application::use_cases::update_application_status::UpdateApplicationStatusUseCase;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::security::bcrypt_hasher::BcryptHasher;
use crate::modules::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::use_cases::login_user::LoginUserUseCase;
use crate::modules::auth::application::use_cases::register_user::RegisterUserUseCase;
use crate::modules::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::modules::email::application::services::notification_service::NotificationService;
use crate::modules::job::adapter::outgoing::job_repository_postgres::JobRepositoryPostgres;
use crate::modules::job::application::job_use_cases::JobUseCases;
use crate::modules::job::application::use_cases::create_job::CreateJobUseCase;
use crate::modules::job::application::use_cases::delete_job::DeleteJobUseCase;
use crate::modules::job::application::use_cases::get_my_jobs::GetMyJobsUseCase;
use crate::modules::job::application::use_cases::get_public_jobs::GetPublicJobsUseCase;
use crate::modules::job::application::use_cases::get_public_single_job::GetPublicSingleJobUseCase;
use crate::modules::job::application::use_cases::review_job::ReviewJobUseCase;
use crate::modules::job::application::use_cases::update_job::UpdateJobUseCase;
use crate::modules::profile::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::use_cases::employer_profile::EmployerProfileUseCase;
use crate::modules::profile::application::use_cases::seeker_profile::SeekerProfileUseCase;
use crate::modules::storage::adapter::outgoing::asset_store_gcs::GcsAssetStore;
use crate::modules::storage::application::ports::outgoing::asset_store::AssetStore;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub profiles: ProfileUseCases,
    pub jobs: JobUseCases,
    pub applications: ApplicationUseCases,
    pub admin: AdminUseCases,
}

/// SMTP is optional: without it every notification becomes a logged no-op
/// and the workflows behave exactly the same otherwise.
fn build_notification_service() -> NotificationService {
    let (server, username, password, from) = match (
        env::var("SMTP_SERVER"),
        env::var("SMTP_USERNAME"),
        env::var("SMTP_PASSWORD"),
        env::var("EMAIL_FROM"),
    ) {
        (Ok(s), Ok(u), Ok(p), Ok(f)) => (s, u, p, f),
        _ => {
            warn!("SMTP not configured; notification emails are disabled");
            return NotificationService::unconfigured();
        }
    };

    match SmtpEmailSender::new(&server, &username, &password, &from) {
        Ok(sender) => NotificationService::new(Arc::new(sender)),
        Err(e) => {
            warn!("Invalid SMTP configuration ({}); notification emails are disabled", e);
            NotificationService::unconfigured()
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set");
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bucket = env::var("GCS_BUCKET").expect("GCS_BUCKET is not set");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db_arc = Arc::new(conn);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let notifications = build_notification_service();

    let asset_store: Arc<dyn AssetStore + Send + Sync> = Arc::new(GcsAssetStore::new(&bucket));

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let job_repo = JobRepositoryPostgres::new(Arc::clone(&db_arc));
    let application_repo = ApplicationRepositoryPostgres::new(Arc::clone(&db_arc));

    let password_hasher = Arc::new(BcryptHasher::new());

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserUseCase::new(
            user_repo.clone(),
            password_hasher.clone(),
        )),
        login: Arc::new(LoginUserUseCase::new(
            user_repo.clone(),
            password_hasher,
            Arc::new(jwt_service.clone()),
        )),
    };

    let profiles = ProfileUseCases {
        seeker: Arc::new(SeekerProfileUseCase::new(profile_repo.clone())),
        employer: Arc::new(EmployerProfileUseCase::new(profile_repo.clone())),
    };

    let jobs = JobUseCases {
        create: Arc::new(CreateJobUseCase::new(
            job_repo.clone(),
            Arc::clone(&asset_store),
        )),
        public_list: Arc::new(GetPublicJobsUseCase::new(job_repo.clone())),
        public_single: Arc::new(GetPublicSingleJobUseCase::new(job_repo.clone())),
        my_jobs: Arc::new(GetMyJobsUseCase::new(job_repo.clone())),
        update: Arc::new(UpdateJobUseCase::new(
            job_repo.clone(),
            Arc::clone(&asset_store),
        )),
        delete: Arc::new(DeleteJobUseCase::new(job_repo.clone())),
        review: Arc::new(ReviewJobUseCase::new(
            job_repo.clone(),
            Arc::new(user_repo.clone()),
            notifications.clone(),
        )),
    };

    let applications = ApplicationUseCases {
        apply: Arc::new(ApplyToJobUseCase::new(
            application_repo.clone(),
            job_repo.clone(),
            Arc::new(profile_repo.clone()),
            Arc::clone(&asset_store),
        )),
        mine: Arc::new(GetMyApplicationsUseCase::new(
            application_repo.clone(),
            Arc::new(profile_repo),
        )),
        applicants: Arc::new(GetJobApplicantsUseCase::new(
            application_repo.clone(),
            job_repo.clone(),
        )),
        update_status: Arc::new(UpdateApplicationStatusUseCase::new(
            application_repo,
            notifications,
        )),
    };

    let admin = AdminUseCases {
        list_users: Arc::new(ListUsersUseCase::new(user_repo.clone())),
        delete_user: Arc::new(DeleteUserUseCase::new(user_repo)),
        delete_job: Arc::new(DeleteAnyJobUseCase::new(job_repo)),
    };

    let state = AppState {
        auth,
        profiles,
        jobs,
        applications,
        admin,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::register_user::register_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::login_user::login_user_handler);
    // Jobs. my-jobs must register before the {id} route or actix matches
    // "my-jobs" as a path parameter.
    cfg.service(crate::modules::job::adapter::incoming::web::routes::create_job::create_job_handler);
    cfg.service(crate::modules::job::adapter::incoming::web::routes::my_jobs::my_jobs_handler);
    cfg.service(crate::modules::job::adapter::incoming::web::routes::public_jobs::list_public_jobs_handler);
    cfg.service(crate::modules::job::adapter::incoming::web::routes::review_job::review_job_handler);
    cfg.service(crate::modules::job::adapter::incoming::web::routes::update_job::update_job_handler);
    cfg.service(crate::modules::job::adapter::incoming::web::routes::delete_job::delete_job_handler);
    cfg.service(crate::modules::job::adapter::incoming::web::routes::public_jobs::get_public_job_handler);
    // Applications
    cfg.service(crate::modules::applications::adapter::incoming::web::routes::apply_to_job::apply_to_job_handler);
    cfg.service(crate::modules::applications::adapter::incoming::web::routes::job_applicants::job_applicants_handler);
    cfg.service(crate::modules::applications::adapter::incoming::web::routes::my_applications::my_applications_handler);
    cfg.service(crate::modules::applications::adapter::incoming::web::routes::update_application_status::update_application_status_handler);
    // Profiles
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::seeker_profile::get_seeker_profile_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::seeker_profile::upsert_seeker_profile_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::seeker_profile::delete_seeker_picture_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::employer_profile::get_employer_profile_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::employer_profile::upsert_employer_profile_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::employer_profile::delete_employer_picture_handler);
    // Admin
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::admin_users::list_users_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::admin_users::delete_user_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::admin_jobs::admin_delete_job_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
