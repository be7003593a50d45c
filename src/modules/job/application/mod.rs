pub mod domain;
pub mod job_use_cases;
pub mod ports;
pub mod use_cases;
