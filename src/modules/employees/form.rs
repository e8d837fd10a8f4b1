//! Create/edit form state.

use super::models::{Employee, EmployeeInput};
use super::session::FormMode;

/// Visible, user-editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Designation,
    BasicSalary,
    Hra,
    Da,
    Deductions,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Designation,
        Field::BasicSalary,
        Field::Hra,
        Field::Da,
        Field::Deductions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Designation => "Designation",
            Field::BasicSalary => "Basic Salary",
            Field::Hra => "HRA",
            Field::Da => "DA",
            Field::Deductions => "Deductions",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FormFields {
    name: String,
    designation: String,
    basic_salary: String,
    hra: String,
    da: String,
    deductions: String,
}

impl FormFields {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Designation => &mut self.designation,
            Field::BasicSalary => &mut self.basic_salary,
            Field::Hra => &mut self.hra,
            Field::Da => &mut self.da,
            Field::Deductions => &mut self.deductions,
        }
    }

    fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Designation => &self.designation,
            Field::BasicSalary => &self.basic_salary,
            Field::Hra => &self.hra,
            Field::Da => &self.da,
            Field::Deductions => &self.deductions,
        }
    }
}

/// Holds one record's worth of form input plus the form mode.
///
/// The identity is hidden: only [`FormController::fill_form`] sets it and
/// only [`FormController::reset_form`] clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    fields: FormFields,
    mode: FormMode,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn title(&self) -> String {
        self.mode.title()
    }

    pub fn submit_label(&self) -> &'static str {
        self.mode.submit_label()
    }

    /// Raw, untrimmed field content.
    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
    }

    /// Collect the current values as a request payload, each trimmed.
    pub fn read_form(&self) -> EmployeeInput {
        let trimmed = |field: Field| self.fields.get(field).trim().to_string();
        EmployeeInput {
            id: self.mode.id(),
            name: trimmed(Field::Name),
            designation: trimmed(Field::Designation),
            basic_salary: trimmed(Field::BasicSalary),
            hra: trimmed(Field::Hra),
            da: trimmed(Field::Da),
            deductions: trimmed(Field::Deductions),
        }
    }

    /// Clear every field and return to create mode.
    pub fn reset_form(&mut self) {
        self.fields = FormFields::default();
        self.mode = FormMode::Create;
    }

    /// Load a persisted record and switch to editing it.
    pub fn fill_form(&mut self, employee: &Employee) {
        self.fields = FormFields {
            name: employee.name.clone(),
            designation: employee.designation.clone(),
            basic_salary: employee.basic_salary.to_string(),
            hra: employee.hra.to_string(),
            da: employee.da.to_string(),
            deductions: employee.deductions.to_string(),
        };
        self.mode = FormMode::Edit(employee.id);
    }
}
