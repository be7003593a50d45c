use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct SeekerProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployerProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_name: String,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
