//! New-bill submission form.
//!
//! The date, amount and percentage inputs are `required`, so a browser will
//! not submit the form while they are empty. The handler enforces the same
//! rule for clients that skip it.

use std::fmt::Write;

use billed_core::bill::{ExpenseType, NewBillForm};
use billed_core::routes::Route;

use super::layout::{escape, page};

/// Heading shown on the new-bill page.
pub const HEADING: &str = "Envoyer une note de frais";

/// Render the form, pre-filled with `form` and optionally showing `notice`.
pub fn render(form: &NewBillForm, notice: Option<&str>) -> String {
    let mut options = String::new();
    for t in ExpenseType::ALL {
        let selected = if form.expense_type == t.label() {
            " selected"
        } else {
            ""
        };
        let label = escape(t.label());
        // Writing to a String cannot fail.
        let _ = writeln!(options, r#"<option value="{label}"{selected}>{label}</option>"#);
    }

    let notice = notice
        .map(|msg| {
            format!(
                r#"<p class="form-error" data-testid="form-error">{}</p>
"#,
                escape(msg)
            )
        })
        .unwrap_or_default();

    let content = format!(
        r#"<div class="content-header">
<div class="content-title"> {HEADING} </div>
</div>
<div class="form-newbill-container content-inner">
{notice}<form data-testid="form-new-bill" method="post" action="{action}" enctype="multipart/form-data">
<div class="col-md-6">
<label for="expense-type" class="bold-label">Type de dépense</label>
<select id="expense-type" name="expense-type" class="form-control blue-border" data-testid="expense-type">
{options}</select>
<label for="expense-name" class="bold-label">Nom de la dépense</label>
<input id="expense-name" name="expense-name" type="text" class="form-control blue-border" data-testid="expense-name" placeholder="Vol Paris Londres" value="{name}">
<label for="datepicker" class="bold-label">Date</label>
<input required id="datepicker" name="datepicker" type="date" class="form-control blue-border" data-testid="datepicker" value="{date}">
<label for="amount" class="bold-label">Montant TTC </label>
<input required id="amount" name="amount" type="number" class="form-control blue-border input-icon input-icon-right" data-testid="amount" placeholder="348" value="{amount}">
<label for="vat" class="bold-label">TVA</label>
<input id="vat" name="vat" type="number" class="form-control blue-border" data-testid="vat" placeholder="70" value="{vat}">
<input required id="pct" name="pct" type="number" class="form-control blue-border" data-testid="pct" placeholder="20" value="{pct}">
</div>
<div class="col-md-6">
<label for="commentary" class="bold-label">Commentaire</label>
<textarea id="commentary" name="commentary" class="form-control blue-border" data-testid="commentary" rows="3">{commentary}</textarea>
<label for="file" class="bold-label">Justificatif</label>
<input id="file" name="file" type="file" accept=".jpg,.jpeg,.png" class="form-control blue-border" data-testid="file">
</div>
<div class="col-md-12">
<button type="submit" id="btn-send-bill" class="btn btn-primary">Envoyer</button>
</div>
</form>
</div>"#,
        action = Route::NewBill.path(),
        name = escape(&form.name),
        date = escape(&form.date),
        amount = escape(&form.amount),
        vat = escape(&form.vat),
        pct = escape(&form.pct),
        commentary = escape(&form.commentary),
    );

    page(HEADING, &content)
}
