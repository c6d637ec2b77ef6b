//! Display formatting for the bills list.

use chrono::Datelike;

use crate::bill::BillStatus;
use crate::types::BillDate;

/// French month abbreviations, capitalized and cut to three characters.
const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Format a date as `{day} {Mon}. {yy}`.
///
/// # Examples
///
/// ```
/// use billed_core::format::format_date;
///
/// let date = chrono::NaiveDate::from_ymd_opt(2004, 4, 4).unwrap();
/// assert_eq!(format_date(date), "4 Avr. 04");
/// ```
pub fn format_date(date: BillDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {month}. {:02}", date.day(), date.year().rem_euclid(100))
}

/// Label shown to the employee for a bill status.
pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refused",
    }
}
