//! Shared test doubles for the action-level tests.
//!
//! - `MemoryStore` - in-memory `InvoiceStore` that counts every call
//! - `ScriptedProvider` - `AuthProvider` that answers with a fixed result

#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;

use invoice_actions::auth::provider::{
    AuthFault, AuthFaultKind, AuthProvider, AuthSession, Credentials, SignInError,
};
use invoice_actions::errors::AppError;
use invoice_actions::models::invoice::{InvoiceChanges, InvoiceStatus, InvoiceStore, NewInvoice};

#[derive(Debug, Clone, PartialEq)]
pub struct StoredInvoice {
    pub id: String,
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<StoredInvoice>>,
    calls: Mutex<usize>,
    fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a database error.
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn seed(&self, row: StoredInvoice) {
        self.rows.lock().unwrap().push(row);
    }

    pub fn rows(&self) -> Vec<StoredInvoice> {
        self.rows.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn begin(&self) -> Result<(), sqlx::Error> {
        *self.calls.lock().unwrap() += 1;
        if self.fail {
            return Err(sqlx::Error::Protocol("connection reset".to_string()));
        }
        Ok(())
    }
}

impl InvoiceStore for MemoryStore {
    async fn insert_invoice(&self, new: &NewInvoice) -> Result<(), sqlx::Error> {
        self.begin()?;
        let mut rows = self.rows.lock().unwrap();
        let id = format!("inv-{}", rows.len() + 1);
        rows.push(StoredInvoice {
            id,
            customer_id: new.customer_id.clone(),
            amount: new.amount,
            status: new.status,
            date: new.date,
        });
        Ok(())
    }

    async fn update_invoice(&self, id: &str, changes: &InvoiceChanges) -> Result<u64, sqlx::Error> {
        self.begin()?;
        let mut rows = self.rows.lock().unwrap();
        let mut touched = 0;
        for row in rows.iter_mut().filter(|r| r.id == id) {
            row.customer_id = changes.customer_id.clone();
            row.amount = changes.amount;
            row.status = changes.status;
            touched += 1;
        }
        Ok(touched)
    }

    async fn delete_invoice(&self, id: &str) -> Result<u64, sqlx::Error> {
        self.begin()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok((before - rows.len()) as u64)
    }
}

pub enum Script {
    Succeed,
    Fault(AuthFaultKind),
    DatabaseDown,
}

pub struct ScriptedProvider {
    script: Script,
    seen_provider: Mutex<Option<String>>,
}

impl ScriptedProvider {
    pub fn new(script: Script) -> Self {
        Self { script, seen_provider: Mutex::new(None) }
    }

    pub fn seen_provider(&self) -> Option<String> {
        self.seen_provider.lock().unwrap().clone()
    }
}

impl AuthProvider for ScriptedProvider {
    async fn sign_in(&self, provider: &str, credentials: &Credentials) -> Result<AuthSession, SignInError> {
        *self.seen_provider.lock().unwrap() = Some(provider.to_string());
        match self.script {
            Script::Succeed => Ok(AuthSession {
                user_id: "u1".to_string(),
                name: "Test User".to_string(),
                email: credentials.email.clone(),
            }),
            Script::Fault(kind) => Err(SignInError::Auth(AuthFault::new(kind, "scripted"))),
            Script::DatabaseDown => Err(SignInError::Other(AppError::Db(sqlx::Error::PoolTimedOut))),
        }
    }
}

pub fn credentials(email: &str, password: &str) -> Credentials {
    Credentials { email: email.to_string(), password: password.to_string() }
}

pub fn sample_invoice(id: &str) -> StoredInvoice {
    StoredInvoice {
        id: id.to_string(),
        customer_id: "c1".to_string(),
        amount: 1000,
        status: InvoiceStatus::Draft,
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    }
}
