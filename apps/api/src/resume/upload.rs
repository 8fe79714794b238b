//! Resume upload — plain-text files only.
//!
//! PDF and Word parsing is out of scope. Any non-text upload gets a
//! placeholder asking the user to paste the resume instead.

use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;

const TEXT_PLAIN: &str = "text/plain";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedResume {
    pub file_name: String,
    pub resume_text: String,
    /// False when `resume_text` is the placeholder rather than file content.
    pub parsed: bool,
}

pub fn placeholder_text(file_name: &str) -> String {
    format!(
        "[Uploaded file: {file_name}]\n\nPlease paste your resume content here or upload a text file."
    )
}

fn is_plain_text(file_name: &str, content_type: Option<&str>) -> bool {
    match content_type {
        Some(ct) => ct
            .split(';')
            .next()
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(TEXT_PLAIN)),
        None => file_name.to_ascii_lowercase().ends_with(".txt"),
    }
}

/// Turns an uploaded file into resume text or the placeholder.
pub fn read_resume(file_name: &str, content_type: Option<&str>, bytes: &[u8]) -> UploadedResume {
    if is_plain_text(file_name, content_type) {
        if let Ok(text) = std::str::from_utf8(bytes) {
            return UploadedResume {
                file_name: file_name.to_string(),
                resume_text: text.to_string(),
                parsed: true,
            };
        }
    }

    UploadedResume {
        file_name: file_name.to_string(),
        resume_text: placeholder_text(file_name),
        parsed: false,
    }
}

/// POST /api/resume/upload
///
/// Multipart form with a `file` field.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<UploadedResume>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;

        let uploaded = read_resume(&file_name, content_type.as_deref(), &bytes);
        info!(
            "Resume upload {} ({} bytes, parsed={})",
            uploaded.file_name,
            bytes.len(),
            uploaded.parsed
        );
        return Ok(Json(uploaded));
    }

    Err(AppError::Validation(
        "Multipart field 'file' is required".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::questions::generator::test_support::StubGenerator;
    use crate::routes::build_router;
    use crate::state::{test_config, AppState};

    #[test]
    fn test_plain_text_upload_returns_content() {
        let uploaded = read_resume("cv.txt", Some("text/plain; charset=utf-8"), b"Rust engineer");
        assert!(uploaded.parsed);
        assert_eq!(uploaded.resume_text, "Rust engineer");
    }

    #[test]
    fn test_pdf_upload_returns_placeholder() {
        let uploaded = read_resume("cv.pdf", Some("application/pdf"), b"%PDF-1.7");
        assert!(!uploaded.parsed);
        assert_eq!(
            uploaded.resume_text,
            "[Uploaded file: cv.pdf]\n\nPlease paste your resume content here or upload a text file."
        );
    }

    #[test]
    fn test_txt_extension_used_when_content_type_missing() {
        assert!(read_resume("CV.TXT", None, b"hello").parsed);
        assert!(!read_resume("cv.docx", None, b"PK").parsed);
    }

    #[test]
    fn test_invalid_utf8_text_falls_back_to_placeholder() {
        let uploaded = read_resume("cv.txt", Some("text/plain"), &[0xff, 0xfe, 0x00]);
        assert!(!uploaded.parsed);
    }

    async fn upload(body: String, boundary: &str) -> (StatusCode, Value) {
        let app = build_router(AppState {
            llm: Arc::new(StubGenerator::new(Vec::new())),
            config: test_config(),
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/resume/upload")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_upload_endpoint_reads_text_file() {
        let boundary = "X-PREPPER-BOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"resume.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             Staff engineer at Acme\r\n\
             --{boundary}--\r\n"
        );
        let (status, json) = upload(body, boundary).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["fileName"], "resume.txt");
        assert_eq!(json["resumeText"], "Staff engineer at Acme");
        assert_eq!(json["parsed"], true);
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_400() {
        let boundary = "X-PREPPER-BOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"note\"\r\n\r\n\
             hello\r\n\
             --{boundary}--\r\n"
        );
        let (status, json) = upload(body, boundary).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Multipart field 'file' is required");
    }
}
