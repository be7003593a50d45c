pub mod multipart;

pub use multipart::{read_form, MultipartFormError, ParsedForm, UploadedFile};
