//! Server-rendered HTML views.
//!
//! Every view is a pure function returning a complete document. Elements
//! tests look up carry a stable `data-testid` attribute.

pub mod bills;
pub mod error_page;
pub mod layout;
pub mod new_bill;
