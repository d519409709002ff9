use askama::Template;
use axum::extract::{RawQuery, State};
use axum::response::{Html, IntoResponse};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;

struct SubmissionRow {
    timestamp: String,
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl From<&Submission> for SubmissionRow {
    fn from(sub: &Submission) -> Self {
        Self {
            timestamp: sub.field_text("timestamp"),
            name: sub.field_text("name"),
            email: sub.field_text("email"),
            subject: sub.field_text("subject"),
            message: sub.field_text("message"),
        }
    }
}

#[derive(Template)]
#[template(path = "admin.html")]
struct AdminTemplate {
    count: usize,
    rows: Vec<SubmissionRow>,
}

pub async fn index(
    State(state): State<SharedState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let supplied = query.as_deref().and_then(first_auth).unwrap_or_default();
    if !secret_matches(&supplied, &state.config.admin_secret) {
        tracing::warn!("Rejected admin access with invalid credential");
        return Err(AppError::Forbidden);
    }

    let submissions = state.store.list_all().await?;

    // Newest first
    let rows: Vec<SubmissionRow> = submissions.iter().rev().map(SubmissionRow::from).collect();

    let template = AdminTemplate {
        count: rows.len(),
        rows,
    };
    let page = template
        .render()
        .map_err(|e| AppError::Internal(format!("Failed to render admin page: {e}")))?;
    Ok(Html(page))
}

/// First `auth` value in the query string; later repeats are ignored.
fn first_auth(query: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "auth")
        .map(|(_, value)| value.into_owned())
}

fn secret_matches(supplied: &str, expected: &str) -> bool {
    supplied.as_bytes().ct_eq(expected.as_bytes()).into()
}
