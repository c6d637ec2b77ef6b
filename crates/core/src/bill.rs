//! Expense bill entity, its enums, and the new-bill form rules.
//!
//! A bill is created once from the employee's form input and is never
//! mutated on this side afterwards. The form rules mirror the `required`
//! attributes rendered on the date, amount and percentage inputs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{BillDate, BillId};

/// Date format used by the date picker and the store.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Expense type
// ---------------------------------------------------------------------------

/// Expense category, serialized with its French label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseType {
    #[serde(rename = "Transports")]
    Transports,
    #[serde(rename = "Restaurants et bars")]
    RestaurantsEtBars,
    #[serde(rename = "Hôtel et logement")]
    HotelEtLogement,
    #[serde(rename = "Services en ligne")]
    ServicesEnLigne,
    #[serde(rename = "IT et électronique")]
    ItEtElectronique,
    #[serde(rename = "Equipement et matériel")]
    EquipementEtMateriel,
    #[serde(rename = "Fournitures de bureau")]
    FournituresDeBureau,
}

impl ExpenseType {
    /// All categories in the order the form select lists them.
    pub const ALL: [ExpenseType; 7] = [
        ExpenseType::Transports,
        ExpenseType::RestaurantsEtBars,
        ExpenseType::HotelEtLogement,
        ExpenseType::ServicesEnLigne,
        ExpenseType::ItEtElectronique,
        ExpenseType::EquipementEtMateriel,
        ExpenseType::FournituresDeBureau,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseType::Transports => "Transports",
            ExpenseType::RestaurantsEtBars => "Restaurants et bars",
            ExpenseType::HotelEtLogement => "Hôtel et logement",
            ExpenseType::ServicesEnLigne => "Services en ligne",
            ExpenseType::ItEtElectronique => "IT et électronique",
            ExpenseType::EquipementEtMateriel => "Equipement et matériel",
            ExpenseType::FournituresDeBureau => "Fournitures de bureau",
        }
    }

    /// Look up a category by its exact French label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }
}

// ---------------------------------------------------------------------------
// Entity and DTOs
// ---------------------------------------------------------------------------

/// A stored expense bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: BillId,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: Option<ExpenseType>,
    pub name: String,
    pub amount: i64,
    pub date: BillDate,
    pub vat: Option<i64>,
    pub pct: i64,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
    pub comment_admin: Option<String>,
}

/// DTO for creating a bill. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBill {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: Option<ExpenseType>,
    pub name: String,
    pub amount: i64,
    pub date: BillDate,
    pub vat: Option<i64>,
    pub pct: i64,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}

impl CreateBill {
    /// Attach an uploaded receipt to the bill.
    pub fn with_file(mut self, file_url: String, file_name: String) -> Self {
        self.file_url = Some(file_url);
        self.file_name = Some(file_name);
        self
    }

    /// Materialize the stored entity under `id`.
    pub fn into_bill(self, id: BillId) -> Bill {
        Bill {
            id,
            email: self.email,
            expense_type: self.expense_type,
            name: self.name,
            amount: self.amount,
            date: self.date,
            vat: self.vat,
            pct: self.pct,
            commentary: self.commentary,
            file_url: self.file_url,
            file_name: self.file_name,
            status: self.status,
            comment_admin: None,
        }
    }
}

// ---------------------------------------------------------------------------
// New-bill form
// ---------------------------------------------------------------------------

/// Raw values of the new-bill form, keyed like the rendered inputs.
///
/// Every field arrives as text. Empty strings mean "not filled in".
#[derive(Debug, Clone, Default, Validate)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "amount is required"))]
    pub amount: String,
    pub vat: String,
    #[validate(length(min = 1, message = "pct is required"))]
    pub pct: String,
    pub commentary: String,
}

impl NewBillForm {
    /// Set a field from its form name. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: &str) {
        let value = value.trim().to_string();
        match name {
            "expense-type" => self.expense_type = value,
            "expense-name" => self.name = value,
            "datepicker" => self.date = value,
            "amount" => self.amount = value,
            "vat" => self.vat = value,
            "pct" => self.pct = value,
            "commentary" => self.commentary = value,
            _ => {}
        }
    }

    /// Check the required fields and parse the form into a pending bill for
    /// `email`. The returned bill carries no attachment yet.
    pub fn into_create_bill(self, email: &str) -> Result<CreateBill, CoreError> {
        self.validate().map_err(|errors| {
            let mut messages: Vec<String> = errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errs)| {
                    errs.iter()
                        .map(|e| match &e.message {
                            Some(msg) => msg.to_string(),
                            None => format!("{field} is invalid"),
                        })
                        .collect::<Vec<_>>()
                })
                .collect();
            messages.sort();
            CoreError::Validation(messages.join(", "))
        })?;

        let expense_type = if self.expense_type.is_empty() {
            None
        } else {
            Some(ExpenseType::from_label(&self.expense_type).ok_or_else(|| {
                CoreError::Validation(format!("Unknown expense type '{}'", self.expense_type))
            })?)
        };

        let date = BillDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|_| {
            CoreError::Validation(format!("date '{}' is not a valid date", self.date))
        })?;

        let vat = if self.vat.is_empty() {
            None
        } else {
            Some(parse_integer("vat", &self.vat)?)
        };

        Ok(CreateBill {
            email: email.to_string(),
            expense_type,
            name: self.name,
            amount: parse_integer("amount", &self.amount)?,
            date,
            vat,
            pct: parse_integer("pct", &self.pct)?,
            commentary: self.commentary,
            file_url: None,
            file_name: None,
            status: BillStatus::Pending,
        })
    }
}

fn parse_integer(field: &str, value: &str) -> Result<i64, CoreError> {
    value
        .parse::<i64>()
        .map_err(|_| CoreError::Validation(format!("{field} '{value}' is not a number")))
}
