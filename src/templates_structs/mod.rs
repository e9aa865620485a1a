// Template context structures for Askama templates, organized by domain.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::get_user_name;
use crate::errors::AppError;

pub mod common;
pub mod invoice;

pub use common::*;
pub use invoice::*;

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.user_name`, `ctx.csrf_token`.
pub struct PageContext {
    pub user_name: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session) -> Result<Self, AppError> {
        let user_name = get_user_name(session)?;
        let csrf_token = csrf::get_or_create_token(session);
        Ok(Self { user_name, csrf_token })
    }
}
