use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EmployeeId)
    }
}

/// A persisted employee as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier assigned by the server
    pub id: EmployeeId,
    /// Display name
    pub name: String,
    /// Job title
    pub designation: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub basic_salary: Decimal,
    /// House rent allowance
    #[serde(with = "rust_decimal::serde::float")]
    pub hra: Decimal,
    /// Dearness allowance
    #[serde(with = "rust_decimal::serde::float")]
    pub da: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub deductions: Decimal,
    /// Computed by the server; never sent by the client
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_salary: Decimal,
    /// Computed by the server; never sent by the client
    #[serde(with = "rust_decimal::serde::float")]
    pub net_salary: Decimal,
}

/// Request payload for creating or replacing an employee.
///
/// Numeric fields stay strings; the server parses and rejects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    pub name: String,
    pub designation: String,
    pub basic_salary: String,
    pub hra: String,
    pub da: String,
    pub deductions: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn employee_decodes_numeric_wire_values() {
        let employee: Employee = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Asha",
            "designation": "Engineer",
            "basic_salary": 5000,
            "hra": 1200.5,
            "da": 300.00,
            "deductions": 150,
            "gross_salary": 6500.5,
            "net_salary": 6350.5
        }))
        .unwrap();

        assert_eq!(employee.id, EmployeeId(7));
        assert_eq!(employee.hra, dec!(1200.5));
        assert_eq!(employee.gross_salary, dec!(6500.5));
        assert_eq!(employee.net_salary, dec!(6350.5));
    }

    #[test]
    fn create_payload_omits_identity() {
        let input = EmployeeInput {
            name: "Asha".to_string(),
            designation: "Engineer".to_string(),
            basic_salary: "5000".to_string(),
            ..EmployeeInput::default()
        };
        let body = serde_json::to_value(&input).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["basic_salary"], "5000");
        assert!(body.get("gross_salary").is_none());
    }

    #[test]
    fn update_payload_carries_identity() {
        let input = EmployeeInput {
            id: Some(EmployeeId(7)),
            ..EmployeeInput::default()
        };
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(body["id"], 7);
    }

    #[test]
    fn identity_parses_from_trimmed_text() {
        assert_eq!(" 42 ".parse::<EmployeeId>().unwrap(), EmployeeId(42));
        assert!("abc".parse::<EmployeeId>().is_err());
    }
}
