use super::models::EmployeeId;

/// Which record, if any, the form is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Entering a new, unsaved record
    #[default]
    Create,
    /// Editing the persisted record with this id
    Edit(EmployeeId),
}

impl FormMode {
    pub fn id(&self) -> Option<EmployeeId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }

    pub fn title(&self) -> String {
        match self {
            FormMode::Create => "Add Employee".to_string(),
            FormMode::Edit(id) => format!("Edit Employee #{}", id),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Save",
            FormMode::Edit(_) => "Update",
        }
    }
}
