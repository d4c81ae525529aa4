//! Form and JSON handlers that drive the task-list generator.

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};

use crate::task::{build_delivery, Delivery, GenerateRequest, GeneratedFile};

use super::pages::{render_downloads, render_form, FormPage};
use super::types::{ErrorResponse, GenerateForm, GenerateResponse};

/// Make a filename safe to place inside a quoted `Content-Disposition` value.
fn sanitize_header_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '"' | '\\' | '/' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

fn attachment(file: GeneratedFile) -> Result<Response, (StatusCode, String)> {
    let disposition = format!(
        "attachment; filename=\"{}\"",
        sanitize_header_filename(&file.filename)
    );
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_DISPOSITION, disposition);
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );

    Ok((headers, file.content).into_response())
}

/// GET / - Empty generator form.
pub async fn show_form() -> Html<String> {
    Html(render_form(&FormPage::default()))
}

/// POST / - Validate the form and return either one file or a download page.
pub async fn submit_form(Form(form): Form<GenerateForm>) -> Response {
    let environment = form.environment.as_deref();
    let base_filename = form.base_filename.as_deref().unwrap_or("");
    let tile_ids = form.tile_ids.as_deref().unwrap_or("");

    let request = match GenerateRequest::from_form(environment, base_filename, tile_ids) {
        Ok(request) => request,
        Err(e) => {
            tracing::info!(error = %e, "Rejected generator form");
            let page = render_form(&FormPage {
                error: Some(&e.to_string()),
                environment,
                base_filename,
                tile_ids,
            });
            return Html(page).into_response();
        }
    };

    let task_count = request.tile_ids.len();
    match build_delivery(&request) {
        Delivery::Single(file) => {
            tracing::info!(
                environment = %request.environment,
                tasks = task_count,
                filename = %file.filename,
                "Generated single task file"
            );
            attachment(file).into_response()
        }
        Delivery::Multiple(files) => {
            tracing::info!(
                environment = %request.environment,
                tasks = task_count,
                files = files.len(),
                "Generated task files"
            );
            Html(render_downloads(&files, task_count)).into_response()
        }
    }
}

/// POST /api/generate - JSON variant returning every file inline.
pub async fn generate_json(
    Json(form): Json<GenerateForm>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request = GenerateRequest::from_form(
        form.environment.as_deref(),
        form.base_filename.as_deref().unwrap_or(""),
        form.tile_ids.as_deref().unwrap_or(""),
    )
    .map_err(|e| {
        tracing::info!(error = %e, "Rejected generate request");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    let files = build_delivery(&request).into_files();
    tracing::info!(
        environment = %request.environment,
        tasks = request.tile_ids.len(),
        files = files.len(),
        "Generated task files via API"
    );

    Ok(Json(GenerateResponse {
        environment: request.environment,
        earthcore_url: request.environment.earthcore_url().to_string(),
        task_count: request.tile_ids.len(),
        files,
    }))
}
