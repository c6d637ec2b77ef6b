//! Handlers for the employee bill pages.
//!
//! Covers the bills list, the new-bill form and its submission, and the
//! uploaded receipts. A successful submission redirects to the bills list; a
//! rejected store call renders the error page with the store's message.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use billed_core::attachment::{sanitize_file_name, validate_attachment_name};
use billed_core::bill::NewBillForm;
use billed_core::error::CoreError;
use billed_core::routes::Route;
use billed_core::user::CurrentUser;
use billed_db::{FileUpload, StoreError};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// GET /employee/bills
pub async fn list_bills(State(state): State<AppState>) -> AppResult<Html<String>> {
    let bills = state.store.bills().list().await?;
    Ok(Html(views::bills::render(bills)))
}

/// GET /employee/bill/new
pub async fn new_bill_page() -> Html<String> {
    Html(views::new_bill::render(&NewBillForm::default(), None))
}

/// POST /employee/bill/new
///
/// Accepts the new-bill form as `multipart/form-data`. When a required field
/// is missing or malformed, or the receipt has an unsupported extension, the
/// form is rendered again with status 422 and nothing is stored. Otherwise
/// the receipt (if any) is uploaded, the bill is created as pending, and the
/// client is redirected to the bills list.
pub async fn submit_new_bill(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let (form, receipt) = read_new_bill_form(&mut multipart).await?;
    let user = connected_employee(&state).await?;

    let input = match form.clone().into_create_bill(&user.email) {
        Ok(input) => input,
        Err(CoreError::Validation(msg)) => return Ok(stay_on_form(&form, &msg)),
        Err(e) => return Err(e.into()),
    };

    let (input, uploaded_key) = match receipt {
        Some(receipt) => {
            if let Err(CoreError::Validation(msg)) = validate_attachment_name(&receipt.file_name)
            {
                return Ok(stay_on_form(&form, &msg));
            }
            let file_name = sanitize_file_name(&receipt.file_name).to_string();
            let uploaded = state.store.bills().upload(receipt).await?;
            (input.with_file(uploaded.file_url, file_name), Some(uploaded.key))
        }
        None => (input, None),
    };

    let bill = match state.store.bills().create(input).await {
        Ok(bill) => bill,
        Err(e) => {
            if let Some(key) = uploaded_key {
                discard_receipt(&state, &key).await;
            }
            return Err(e.into());
        }
    };
    tracing::info!(bill_id = %bill.id, email = %bill.email, "New bill submitted");

    Ok(navigate(Route::Bills).into_response())
}

/// GET /images/{name}
///
/// Serves an uploaded receipt. `name` is the last path segment of the
/// `fileUrl` handed out by the store: `{key}-{file_name}`.
pub async fn receipt_file(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    let (key, file_name) = name
        .split_once('-')
        .ok_or_else(|| AppError::BadRequest(format!("Nom de justificatif invalide: {name}")))?;

    let file = state
        .store
        .bills()
        .file(key)
        .await?
        .filter(|file| file.file_name == file_name)
        .ok_or_else(|| StoreError::http(404))?;

    let content_type = file
        .content_type
        .unwrap_or_else(|| "application/octet-stream".to_string());
    Ok(([(header::CONTENT_TYPE, content_type)], file.data).into_response())
}

/// Redirect to `route`.
pub fn navigate(route: Route) -> Redirect {
    Redirect::to(route.path())
}

// ── Private helpers ──────────────────────────────────────────────────────

/// Re-render the form with the entered values and `msg`.
fn stay_on_form(form: &NewBillForm, msg: &str) -> Response {
    tracing::debug!(reason = %msg, "New bill submission refused");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(views::new_bill::render(form, Some(msg))),
    )
        .into_response()
}

/// Drop a receipt whose bill was never created.
async fn discard_receipt(state: &AppState, key: &str) {
    if let Err(e) = state.store.bills().remove_file(key).await {
        tracing::warn!(%key, error = %e, "Failed to discard orphaned receipt");
    }
}

/// The connected user the bill is filed for.
async fn connected_employee(state: &AppState) -> AppResult<CurrentUser> {
    state
        .session
        .current_user()
        .await?
        .filter(CurrentUser::is_connected)
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Aucun utilisateur connecté".into())))
}

/// Read the text fields and the optional `file` part.
///
/// A file part with no name and no content means no file was chosen.
async fn read_new_bill_form(
    multipart: &mut Multipart,
) -> AppResult<(NewBillForm, Option<FileUpload>)> {
    let mut form = NewBillForm::default();
    let mut receipt: Option<FileUpload> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            let file_name = field.file_name().unwrap_or("").to_string();
            let content_type = field.content_type().map(str::to_string);
            let data = field.bytes().await?;
            if file_name.is_empty() && data.is_empty() {
                continue;
            }
            receipt = Some(FileUpload {
                file_name,
                content_type,
                data: data.to_vec(),
            });
        } else {
            let text = field.text().await?;
            form.set_field(&name, &text);
        }
    }

    Ok((form, receipt))
}
