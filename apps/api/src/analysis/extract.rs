//! Uploaded resume → plain text.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}. Upload a PDF or plain-text resume.")]
    Unsupported(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("No text could be extracted from the uploaded file")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Decides from the declared content type, then the file extension.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        let mime = content_type
            .map(|ct| ct.split(';').next().unwrap_or(ct).trim().to_ascii_lowercase());
        match mime.as_deref() {
            Some("application/pdf") => return Some(Self::Pdf),
            Some("text/plain") => return Some(Self::PlainText),
            _ => {}
        }

        let name = file_name?.to_ascii_lowercase();
        if name.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if name.ends_with(".txt") {
            Some(Self::PlainText)
        } else {
            None
        }
    }
}

/// Extracts text from an uploaded resume. PDF parsing runs on the blocking pool.
pub async fn extract_text(
    data: Bytes,
    content_type: Option<&str>,
    file_name: Option<&str>,
) -> Result<String, ExtractError> {
    let kind = DocumentKind::detect(content_type, file_name).ok_or_else(|| {
        ExtractError::Unsupported(
            content_type
                .or(file_name)
                .unwrap_or("unknown")
                .to_string(),
        )
    })?;

    let text = match kind {
        DocumentKind::PlainText => String::from_utf8_lossy(&data).into_owned(),
        DocumentKind::Pdf => {
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
                .await
                .map_err(|e| ExtractError::Pdf(e.to_string()))?
                .map_err(|e| ExtractError::Pdf(e.to_string()))?
        }
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(ExtractError::Empty);
    }
    debug!(?kind, chars = text.chars().count(), "extracted resume text");
    Ok(text)
}
