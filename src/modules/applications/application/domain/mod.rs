pub mod entities;

pub use entities::{Application, ApplicationStatus};
