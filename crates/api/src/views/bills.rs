//! Employee bills list.

use std::fmt::Write;

use billed_core::bill::Bill;
use billed_core::format::{format_date, format_status};
use billed_core::routes::Route;

use super::layout::{escape, page};

/// Heading shown on the bills page.
pub const HEADING: &str = "Mes notes de frais";

/// Order bills most recent first.
pub fn sort_most_recent_first(bills: &mut [Bill]) {
    bills.sort_by(|a, b| b.date.cmp(&a.date));
}

fn row(bill: &Bill) -> String {
    let expense_type = bill.expense_type.map(|t| t.label()).unwrap_or("");
    let file_url = bill.file_url.as_deref().unwrap_or("");
    format!(
        r#"<tr>
<td>{expense_type}</td>
<td>{name}</td>
<td>{date}</td>
<td>{amount} €</td>
<td>{status}</td>
<td><div class="icon-actions"><div id="eye" data-testid="icon-eye" data-bill-url="{file_url}">voir</div></div></td>
</tr>
"#,
        expense_type = escape(expense_type),
        name = escape(&bill.name),
        date = format_date(bill.date),
        amount = bill.amount,
        status = format_status(bill.status),
        file_url = escape(file_url),
    )
}

/// Render the bills list. `bills` is displayed most recent first.
pub fn render(mut bills: Vec<Bill>) -> String {
    sort_most_recent_first(&mut bills);

    let mut rows = String::new();
    for bill in &bills {
        rows.push_str(&row(bill));
    }

    let mut content = String::new();
    // Writing to a String cannot fail.
    let _ = write!(
        content,
        r#"<div class="content-header">
<div class="content-title"> {HEADING} </div>
<a data-testid="btn-new-bill" class="btn btn-primary" href="{new_bill}">Nouvelle note de frais</a>
</div>
<div id="data-table">
<table id="example" class="table table-striped" style="width:100%">
<thead>
<tr>
<th>Type</th>
<th>Nom</th>
<th>Date</th>
<th>Montant</th>
<th>Statut</th>
<th>Actions</th>
</tr>
</thead>
<tbody data-testid="tbody">
{rows}</tbody>
</table>
</div>"#,
        new_bill = Route::NewBill.path(),
    );

    page(HEADING, &content)
}
