pub mod download_url;

pub use download_url::attachment_url;
