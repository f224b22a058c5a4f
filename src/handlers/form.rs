//! Interactive form handlers
//!
//! One multipart form carries both inputs. A non-empty uploaded file wins
//! over the manual selections.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    response::{Html, IntoResponse, Response},
};

use crate::logic::features::FeatureRow;
use crate::logic::pipeline::{
    self, build_row_from_manual_selection, load_row_from_csv, resolve_selection, Outcome,
};
use crate::{views, AppError, AppState};

const FILE_FIELD: &str = "file";

/// Error rendered as an HTML page
#[derive(Debug)]
pub struct PageError(AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        PageError(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.0.status(), Html(views::error_page(&self.0))).into_response()
    }
}

#[derive(Debug, Default)]
struct Submission {
    fields: HashMap<String, String>,
    file: Option<Bytes>,
}

fn repeated_field(name: &str) -> AppError {
    AppError::BadUpload(format!("field '{}' submitted more than once", name))
}

async fn read_submission(mut multipart: Multipart) -> Result<Submission, AppError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == FILE_FIELD {
            // Browsers send an empty part when no file was chosen
            let bytes = field.bytes().await?;
            if !bytes.is_empty() {
                if submission.file.is_some() {
                    return Err(repeated_field(&name));
                }
                submission.file = Some(bytes);
            }
        } else {
            match submission.fields.entry(name) {
                Entry::Occupied(entry) => return Err(repeated_field(entry.key())),
                Entry::Vacant(entry) => {
                    entry.insert(field.text().await?);
                }
            }
        }
    }

    Ok(submission)
}

fn row_from_submission(submission: &Submission) -> Result<FeatureRow, AppError> {
    let row = match &submission.file {
        Some(bytes) => load_row_from_csv(bytes)?,
        None => build_row_from_manual_selection(&resolve_selection(&submission.fields)?)?,
    };
    Ok(row)
}

/// Render the input form
pub async fn index() -> Html<String> {
    Html(views::form_page())
}

/// Handle a form submit
pub async fn submit(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, PageError> {
    let outcome = predict_submission(&state, multipart).await?;
    Ok(Html(views::result_page(&outcome)))
}

async fn predict_submission(state: &AppState, multipart: Multipart) -> Result<Outcome, AppError> {
    let submission = read_submission(multipart).await?;
    let row = row_from_submission(&submission)?;
    let model = state.classifier()?;
    Ok(pipeline::run(&row, model.as_ref())?)
}
