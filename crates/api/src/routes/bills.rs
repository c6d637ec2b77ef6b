//! Route definitions for the employee bill pages.

use axum::routing::get;
use axum::Router;
use billed_core::routes::Route;

use crate::handlers::bills;
use crate::state::AppState;

/// Page routes.
///
/// ```text
/// GET    /employee/bills      -> list_bills
/// GET    /employee/bill/new   -> new_bill_page
/// POST   /employee/bill/new   -> submit_new_bill
/// GET    /images/{name}       -> receipt_file
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(Route::Bills.path(), get(bills::list_bills))
        .route(
            Route::NewBill.path(),
            get(bills::new_bill_page).post(bills::submit_new_bill),
        )
        .route("/images/{name}", get(bills::receipt_file))
}
