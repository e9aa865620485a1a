use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Draft,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [InvoiceStatus::Paid, InvoiceStatus::Pending, InvoiceStatus::Draft];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Draft => "draft",
        }
    }

    /// Exact match against the stored literals; no trimming or case folding.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Draft => "Draft",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form data from the create/edit invoice forms. Every field is optional so a
/// missing key reaches the validator instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceForm {
    #[serde(rename = "customerId", default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub csrf_token: String,
}

/// Row to insert. `amount` is in minor units.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Mutable columns for an update. Id and date are not representable here.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceChanges {
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone, FromRow)]
pub struct Invoice {
    pub id: String,
    pub customer_id: String,
    pub amount: i64,
    pub status: String,
    pub date: NaiveDate,
}

/// Listing row, joined with the customer name.
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceListItem {
    pub id: String,
    pub customer_id: String,
    pub customer_name: Option<String>,
    pub amount: i64,
    pub status: String,
    pub date: NaiveDate,
}

impl InvoiceListItem {
    pub fn amount_display(&self) -> String {
        format!("${}", format_minor_units(self.amount))
    }

    pub fn customer_display(&self) -> &str {
        self.customer_name.as_deref().unwrap_or(&self.customer_id)
    }
}

/// Render minor units as a plain major-unit decimal, e.g. 4550 -> "45.50".
pub fn format_minor_units(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
