/// Bill keys are opaque strings assigned by the store.
pub type BillId = String;

/// All calendar dates on bills are naive (no time zone).
pub type BillDate = chrono::NaiveDate;
