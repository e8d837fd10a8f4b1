//! Table rendering. Pure functions of the loaded collection.

use std::fmt::Write as _;

use super::action::Action;
use super::models::{Employee, EmployeeId};
use crate::utils::{escape_html, format_amount, truncate};

/// One rendered table row. Text cells hold display values, not markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: EmployeeId,
    pub name: String,
    pub designation: String,
    pub basic_salary: String,
    pub hra: String,
    pub da: String,
    pub deductions: String,
    pub gross_salary: String,
    pub net_salary: String,
}

impl EmployeeRow {
    fn from_employee(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            designation: employee.designation.clone(),
            basic_salary: format_amount(employee.basic_salary),
            hra: format_amount(employee.hra),
            da: format_amount(employee.da),
            deductions: format_amount(employee.deductions),
            gross_salary: format_amount(employee.gross_salary),
            net_salary: format_amount(employee.net_salary),
        }
    }

    /// Edit and Delete controls, bound to this record's id.
    pub fn actions(&self) -> [Action; 2] {
        [Action::Edit(self.id), Action::Delete(self.id)]
    }

    /// `<tr>` markup; name and designation are escaped.
    pub fn to_html(&self) -> String {
        let id = self.id;
        format!(
            concat!(
                "<tr data-id=\"{id}\">",
                "<td>{id}</td>",
                "<td>{name}</td>",
                "<td>{designation}</td>",
                "<td>{basic}</td>",
                "<td>{hra}</td>",
                "<td>{da}</td>",
                "<td>{deductions}</td>",
                "<td class=\"pill\">{gross}</td>",
                "<td class=\"pill\">{net}</td>",
                "<td class=\"actions\">",
                "<button class=\"secondary\" data-action=\"edit\" data-id=\"{id}\">Edit</button>",
                "<button data-action=\"delete\" data-id=\"{id}\">Delete</button>",
                "</td>",
                "</tr>"
            ),
            id = id,
            name = escape_html(&self.name),
            designation = escape_html(&self.designation),
            basic = self.basic_salary,
            hra = self.hra,
            da = self.da,
            deductions = self.deductions,
            gross = self.gross_salary,
            net = self.net_salary,
        )
    }
}

/// The rendered employee table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    rows: Vec<EmployeeRow>,
}

impl TableView {
    pub fn rows(&self) -> &[EmployeeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, id: EmployeeId) -> Option<&EmployeeRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// `<tbody>` markup for the whole table.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<tbody>");
        for row in &self.rows {
            html.push_str(&row.to_html());
        }
        html.push_str("</tbody>");
        html
    }

    /// Fixed-width console table.
    pub fn to_text(&self) -> String {
        if self.rows.is_empty() {
            return "No employees found.\n".to_string();
        }

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<5} {:<20} {:<18} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "ID", "Name", "Designation", "Basic", "HRA", "DA", "Deductions", "Gross", "Net"
        );
        let _ = writeln!(out, "{}", "-".repeat(123));
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{:<5} {:<20} {:<18} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
                row.id.to_string(),
                truncate(&row.name, 20),
                truncate(&row.designation, 18),
                row.basic_salary,
                row.hra,
                row.da,
                row.deductions,
                row.gross_salary,
                row.net_salary
            );
        }
        out
    }
}

/// Build a fresh view for `employees`, in server order.
pub fn render_rows(employees: &[Employee]) -> TableView {
    TableView {
        rows: employees.iter().map(EmployeeRow::from_employee).collect(),
    }
}
