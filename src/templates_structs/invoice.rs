use askama::Template;

use crate::actions::ActionState;
use crate::models::customer::CustomerOption;
use crate::models::invoice::{Invoice, InvoiceForm, InvoiceListItem, InvoiceStatus, format_minor_units};
use super::PageContext;

#[derive(Template)]
#[template(path = "invoices/list.html")]
pub struct InvoiceListTemplate {
    pub ctx: PageContext,
    pub invoices: Vec<InvoiceListItem>,
}

pub struct CustomerChoice {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

pub struct StatusChoice {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Raw values echoed back into the form.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFormValues {
    pub customer_id: String,
    pub amount: String,
    pub status: String,
}

impl From<&InvoiceForm> for InvoiceFormValues {
    fn from(form: &InvoiceForm) -> Self {
        Self {
            customer_id: form.customer_id.clone().unwrap_or_default(),
            amount: form.amount.clone().unwrap_or_default(),
            status: form.status.clone().unwrap_or_default(),
        }
    }
}

impl From<&Invoice> for InvoiceFormValues {
    fn from(invoice: &Invoice) -> Self {
        Self {
            customer_id: invoice.customer_id.clone(),
            amount: format_minor_units(invoice.amount),
            status: invoice.status.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "invoices/form.html")]
pub struct InvoiceFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub submit_label: String,
    pub customers: Vec<CustomerChoice>,
    pub statuses: Vec<StatusChoice>,
    pub amount: String,
    pub state: ActionState,
}

impl InvoiceFormTemplate {
    pub fn new(
        ctx: PageContext,
        form_action: String,
        form_title: &str,
        submit_label: &str,
        customers: Vec<CustomerOption>,
        values: InvoiceFormValues,
        state: ActionState,
    ) -> Self {
        let customers = customers
            .into_iter()
            .map(|c| CustomerChoice { selected: c.id == values.customer_id, id: c.id, name: c.name })
            .collect();
        let statuses = InvoiceStatus::ALL
            .iter()
            .map(|s| StatusChoice { value: s.as_str(), label: s.label(), checked: s.as_str() == values.status })
            .collect();
        Self {
            ctx,
            form_action,
            form_title: form_title.to_string(),
            submit_label: submit_label.to_string(),
            customers,
            statuses,
            amount: values.amount,
            state,
        }
    }
}
