use chrono::Utc;

use super::{ActionState, Capabilities, Effect, INVOICES_ROUTE, Outcome};
use crate::errors::AppError;
use crate::models::invoice::schema::{self, FieldSource, InvoiceView, ValidInvoice};
use crate::models::invoice::{InvoiceChanges, InvoiceStore, NewInvoice};

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const STORE_FAILURE: &str = "Something went wrong";

/// Validate a submission, or turn its field errors into a form state.
pub fn validate_or_report(view: InvoiceView, source: &impl FieldSource) -> Result<ValidInvoice, ActionState> {
    schema::validate(view, source).map_err(|errors| ActionState {
        errors,
        message: Some(MISSING_FIELDS.to_string()),
    })
}

fn invalidate_and_redirect() -> Vec<Effect> {
    vec![
        Effect::Invalidate(INVOICES_ROUTE.to_string()),
        Effect::Redirect(INVOICES_ROUTE.to_string()),
    ]
}

/// Insert a new invoice dated today. The previous form state is not consulted.
pub async fn create_invoice<S: InvoiceStore>(
    store: &S,
    _prev_state: &ActionState,
    form: &impl FieldSource,
) -> Outcome {
    let valid = match validate_or_report(InvoiceView::Create, form) {
        Ok(v) => v,
        Err(state) => return Outcome::Failed(state),
    };

    let new = NewInvoice {
        amount: valid.amount_in_cents(),
        customer_id: valid.customer_id,
        status: valid.status,
        date: Utc::now().date_naive(),
    };

    if let Err(e) = store.insert_invoice(&new).await {
        log::error!("Failed to insert invoice for customer {}: {e}", new.customer_id);
        return Outcome::Failed(ActionState::with_message(STORE_FAILURE));
    }

    log::info!("Created invoice for customer {} ({} cents, {})", new.customer_id, new.amount, new.status);
    Outcome::Done(invalidate_and_redirect())
}

/// Overwrite customer, amount and status of an existing invoice.
pub async fn update_invoice<S: InvoiceStore>(store: &S, id: &str, form: &impl FieldSource) -> Outcome {
    let valid = match validate_or_report(InvoiceView::Update, form) {
        Ok(v) => v,
        Err(state) => return Outcome::Failed(state),
    };

    let changes = InvoiceChanges {
        amount: valid.amount_in_cents(),
        customer_id: valid.customer_id,
        status: valid.status,
    };

    match store.update_invoice(id, &changes).await {
        Ok(0) => log::warn!("Update matched no invoice with id {id}"),
        Ok(_) => log::info!("Updated invoice {id}"),
        Err(e) => {
            log::error!("Failed to update invoice {id}: {e}");
            return Outcome::Failed(ActionState::with_message(STORE_FAILURE));
        }
    }

    Outcome::Done(invalidate_and_redirect())
}

/// Remove an invoice. Fails with `NotImplemented` unless the deployment
/// enables deletes; in that case nothing reaches the store.
pub async fn delete_invoice<S: InvoiceStore>(
    store: &S,
    capabilities: &Capabilities,
    id: &str,
) -> Result<Outcome, AppError> {
    if !capabilities.delete_supported {
        return Err(AppError::NotImplemented("delete invoice"));
    }

    match store.delete_invoice(id).await {
        Ok(n) => log::info!("Deleted invoice {id} ({n} row(s))"),
        Err(e) => {
            log::error!("Failed to delete invoice {id}: {e}");
            return Ok(Outcome::Failed(ActionState::with_message(STORE_FAILURE)));
        }
    }

    Ok(Outcome::Done(vec![Effect::Invalidate(INVOICES_ROUTE.to_string())]))
}
