pub mod crud;
pub mod list;

pub use crud::{create, delete, edit_form, new_form, update};
pub use list::list;
