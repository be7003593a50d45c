use actix_multipart::Multipart;
use futures::StreamExt;
use std::collections::HashMap;

/// Per-file size ceiling for resume/logo uploads.
const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct ParsedForm {
    texts: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl ParsedForm {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts.get(name).map(|s| s.as_str())
    }

    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MultipartFormError {
    #[error("Malformed multipart payload: {0}")]
    Malformed(String),

    #[error("File field '{0}' exceeds the upload size limit")]
    FileTooLarge(String),

    #[error("Text field '{0}' is not valid UTF-8")]
    InvalidText(String),
}

/// Drains a multipart payload into named text and file fields. Fields
/// carrying a filename in their content disposition are treated as files,
/// everything else as UTF-8 text.
pub async fn read_form(mut payload: Multipart) -> Result<ParsedForm, MultipartFormError> {
    let mut form = ParsedForm::default();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| MultipartFormError::Malformed(e.to_string()))?;

        let (name, filename) = {
            let disposition = field
                .content_disposition()
                .ok_or_else(|| MultipartFormError::Malformed("missing content disposition".into()))?;

            let name = disposition
                .get_name()
                .ok_or_else(|| MultipartFormError::Malformed("unnamed form field".into()))?
                .to_string();
            let filename = disposition.get_filename().map(|f| f.to_string());

            (name, filename)
        };

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| MultipartFormError::Malformed(e.to_string()))?;
            if bytes.len() + chunk.len() > MAX_FILE_BYTES {
                return Err(MultipartFormError::FileTooLarge(name));
            }
            bytes.extend_from_slice(&chunk);
        }

        match filename {
            Some(filename) => {
                form.files.insert(name, UploadedFile { filename, bytes });
            }
            None => {
                let text = String::from_utf8(bytes)
                    .map_err(|_| MultipartFormError::InvalidText(name.clone()))?;
                form.texts.insert(name, text);
            }
        }
    }

    Ok(form)
}
