//! Invoice field validation.
//!
//! The full record has five fields. Create and update submissions only carry
//! `customerId`, `amount` and `status`; id and date are owned by the database
//! and the create action. Every failing field is reported, not just the first.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::types::{InvoiceForm, InvoiceStatus};

pub const CUSTOMER_REQUIRED: &str = "Please select a customer";
pub const AMOUNT_REQUIRED: &str = "Please enter an amount";
pub const STATUS_REQUIRED: &str = "Please select a status";
pub const FIELD_REQUIRED: &str = "Required";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    CustomerId,
    Amount,
    Status,
    Date,
}

impl Field {
    /// Name of the field in a form submission.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::CustomerId => "customerId",
            Field::Amount => "amount",
            Field::Status => "status",
            Field::Date => "date",
        }
    }
}

/// Which subset of the invoice shape a submission is checked against.
///
/// `Create` and `Update` accept the same fields today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceView {
    Record,
    Create,
    Update,
}

impl InvoiceView {
    pub fn fields(&self) -> &'static [Field] {
        match self {
            InvoiceView::Record => &[Field::Id, Field::CustomerId, Field::Amount, Field::Status, Field::Date],
            InvoiceView::Create | InvoiceView::Update => &[Field::CustomerId, Field::Amount, Field::Status],
        }
    }
}

/// Anything a submission can be read from.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<&str>;
}

impl FieldSource for InvoiceForm {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "customerId" => self.customer_id.as_deref(),
            "amount" => self.amount.as_deref(),
            "status" => self.status.as_deref(),
            _ => None,
        }
    }
}

impl FieldSource for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Per-field messages. Empty lists are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customer_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amount: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub date: Vec<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.customer_id.is_empty()
            && self.amount.is_empty()
            && self.status.is_empty()
            && self.date.is_empty()
    }

    pub fn push(&mut self, field: Field, message: &str) {
        let slot = match field {
            Field::Id => &mut self.id,
            Field::CustomerId => &mut self.customer_id,
            Field::Amount => &mut self.amount,
            Field::Status => &mut self.status,
            Field::Date => &mut self.date,
        };
        slot.push(message.to_string());
    }

    /// Fields that carry at least one message, in declaration order.
    pub fn fields(&self) -> Vec<Field> {
        [
            (Field::Id, &self.id),
            (Field::CustomerId, &self.customer_id),
            (Field::Amount, &self.amount),
            (Field::Status, &self.status),
            (Field::Date, &self.date),
        ]
        .into_iter()
        .filter(|(_, msgs)| !msgs.is_empty())
        .map(|(f, _)| f)
        .collect()
    }
}

/// A create/update submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidInvoice {
    pub customer_id: String,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    amount_in_cents: i64,
}

impl ValidInvoice {
    /// Amount in minor units (input x 100).
    pub fn amount_in_cents(&self) -> i64 {
        self.amount_in_cents
    }
}

/// A complete invoice record that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRecord {
    pub id: String,
    pub customer_id: String,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub date: String,
}

#[derive(Default)]
struct Parsed {
    id: Option<String>,
    customer_id: Option<String>,
    amount: Option<(Decimal, i64)>,
    status: Option<InvoiceStatus>,
    date: Option<String>,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Split an optional leading sign off a number. `true` means negative.
fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

/// Parse a major-unit amount in plain (`12`, `-4.5`, `.5`) or scientific
/// (`1e2`, `2.5E-3`) decimal notation. Digit separators, hex literals and
/// named values such as `Infinity` are rejected.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let (negative, unsigned) = split_sign(raw.trim());
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if (int_part.is_empty() && frac_part.is_empty()) || !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let value = if frac_part.is_empty() {
        Decimal::from_str(int_part)
    } else {
        Decimal::from_str(&format!("{int_part}.{frac_part}"))
    }
    .ok()?;

    let exponent = match exponent {
        None => 0,
        Some(e) => {
            let (exp_negative, digits) = split_sign(e);
            if digits.is_empty() || !all_digits(digits) {
                return None;
            }
            // Too many digits for i64 still means "huge"; the shift saturates.
            let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
            if exp_negative { -magnitude } else { magnitude }
        }
    };

    let shifted = shift_decimal(value, exponent)?;
    Some(if negative { -shifted } else { shifted })
}

/// `value * 10^exponent`. Values too small to represent become zero;
/// `None` on overflow.
fn shift_decimal(mut value: Decimal, exponent: i64) -> Option<Decimal> {
    if value.is_zero() {
        return Some(Decimal::ZERO);
    }
    if exponent >= 0 {
        for _ in 0..exponent {
            value = value.checked_mul(Decimal::TEN)?;
        }
    } else {
        for _ in 0..exponent.unsigned_abs() {
            // Dividing by ten cannot overflow, only underflow.
            value = value.checked_div(Decimal::TEN).unwrap_or_default();
            if value.is_zero() {
                break;
            }
        }
    }
    Some(value)
}

/// Major units to minor units, rounded half away from zero.
/// `None` if the result does not fit.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

fn check(view: InvoiceView, source: &impl FieldSource) -> (Parsed, FieldErrors) {
    let mut parsed = Parsed::default();
    let mut errors = FieldErrors::default();

    for &field in view.fields() {
        let raw = present(source.field(field.name()));
        match field {
            Field::Id => match raw {
                Some(v) => parsed.id = Some(v.to_string()),
                None => errors.push(field, FIELD_REQUIRED),
            },
            Field::CustomerId => match raw {
                Some(v) => parsed.customer_id = Some(v.to_string()),
                None => errors.push(field, CUSTOMER_REQUIRED),
            },
            Field::Amount => {
                match raw.and_then(parse_amount).and_then(|a| to_minor_units(a).map(|c| (a, c))) {
                    Some(pair) => parsed.amount = Some(pair),
                    None => errors.push(field, AMOUNT_REQUIRED),
                }
            }
            Field::Status => match source.field(field.name()).and_then(InvoiceStatus::parse) {
                Some(s) => parsed.status = Some(s),
                None => errors.push(field, STATUS_REQUIRED),
            },
            Field::Date => match raw {
                Some(v) => parsed.date = Some(v.to_string()),
                None => errors.push(field, FIELD_REQUIRED),
            },
        }
    }

    (parsed, errors)
}

/// Validate a create or update submission, collecting every field error.
pub fn validate(view: InvoiceView, source: &impl FieldSource) -> Result<ValidInvoice, FieldErrors> {
    let (parsed, errors) = check(view, source);
    match (parsed.customer_id, parsed.amount, parsed.status) {
        (Some(customer_id), Some((amount, amount_in_cents)), Some(status)) if errors.is_empty() => {
            Ok(ValidInvoice { customer_id, amount, status, amount_in_cents })
        }
        _ => Err(errors),
    }
}

/// Validate a complete record, including id and date.
pub fn validate_record(source: &impl FieldSource) -> Result<InvoiceRecord, FieldErrors> {
    let (parsed, errors) = check(InvoiceView::Record, source);
    match (parsed.id, parsed.customer_id, parsed.amount, parsed.status, parsed.date) {
        (Some(id), Some(customer_id), Some((amount, _)), Some(status), Some(date)) if errors.is_empty() => {
            Ok(InvoiceRecord { id, customer_id, amount, status, date })
        }
        _ => Err(errors),
    }
}
