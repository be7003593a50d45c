use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;

fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        access_token_expiry: 3600,
    })
}

/// The token provider app_data the guarded extractors look up. Register this
/// on the test App alongside the AppState.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
    web::Data::new(provider)
}

/// A ready-to-insert Authorization header value for the given principal.
pub fn bearer(user_id: Uuid, role: Role) -> String {
    let token = test_jwt_service()
        .generate_access_token(user_id, role)
        .expect("test token generation");
    format!("Bearer {}", token)
}
