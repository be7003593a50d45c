pub mod entities;

pub use entities::{Job, JobStatus};
