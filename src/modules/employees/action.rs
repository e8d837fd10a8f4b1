use super::models::EmployeeId;

/// A discrete user action. Row actions carry the record id, never a row
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
    Reset,
    Refresh,
    Edit(EmployeeId),
    Delete(EmployeeId),
}

/// What the presentation layer has to show after an action ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Non-blocking success notification
    Toast(String),
    /// Blocking error notification with the best available message
    Alert(String),
    /// The table was replaced with a fresh server snapshot
    Rendered { rows: usize },
    FormReset,
    FormFilled(EmployeeId),
    /// The user declined a confirmation; nothing was sent
    Cancelled,
}

/// Interactive yes/no confirmation supplied by the presentation layer.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}
