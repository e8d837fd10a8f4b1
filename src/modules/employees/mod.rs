//! Employee records: form state, table rendering and synchronization with
//! the remote collection.

pub mod action;
pub mod api;
pub mod form;
pub mod models;
pub mod session;
pub mod sync;
pub mod view;

pub use action::{Action, Confirm, Effect};
pub use api::{EmployeeApi, RemoteEmployeeApi};
pub use form::{Field, FormController};
pub use models::{Employee, EmployeeId, EmployeeInput};
pub use session::FormMode;
pub use sync::{Saved, SyncEngine};
pub use view::{render_rows, EmployeeRow, TableView};
