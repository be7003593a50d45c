pub mod admin_use_cases;
pub mod use_cases;
