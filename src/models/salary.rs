//! Salary structure records.
//!
//! A salary is described as a base wage plus six components, each either a
//! fixed currency amount or a percentage of a reference base. Resolving a
//! structure into concrete amounts lives in
//! [`crate::calculation::resolve_breakdown`].

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether the base wage is a fixed figure or an hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageType {
    /// A fixed wage for the pay period.
    Fixed,
    /// An hourly wage.
    Hourly,
}

/// How a salary component's value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// The value is the currency amount itself.
    Fixed,
    /// The value is a percentage of the component's reference base.
    Percentage,
}

/// One salary component definition: a kind and a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponent {
    /// How `value` is interpreted.
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// The fixed amount or the percentage figure.
    pub value: Decimal,
}

impl SalaryComponent {
    /// A fixed-amount component.
    pub fn fixed(value: Decimal) -> Self {
        Self {
            kind: ComponentKind::Fixed,
            value,
        }
    }

    /// A percentage component.
    pub fn percentage(value: Decimal) -> Self {
        Self {
            kind: ComponentKind::Percentage,
            value,
        }
    }
}

/// The full compensation structure for an employee.
///
/// All percentage components resolve against `base_wage` except HRA,
/// which resolves against the resolved basic amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// Whether `base_wage` is fixed or hourly.
    pub wage_type: WageType,
    /// The gross compensation figure percentage components derive from.
    pub base_wage: Decimal,
    /// Basic pay component.
    pub basic: SalaryComponent,
    /// House rent allowance; percentage-of-basic, not percentage-of-wage.
    pub hra: SalaryComponent,
    /// Standard allowance component.
    pub standard_allowance: SalaryComponent,
    /// Performance bonus component.
    pub performance_bonus: SalaryComponent,
    /// Leave travel allowance component.
    pub lta: SalaryComponent,
    /// Fixed allowance component.
    pub fixed_allowance: SalaryComponent,
    /// The date this structure takes effect.
    pub effective_from: NaiveDate,
}

/// A persisted salary record: one active structure per employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    /// Store-assigned record identifier.
    pub id: String,
    /// The employee the structure belongs to.
    pub employee_id: String,
    /// The compensation structure.
    #[serde(flatten)]
    pub structure: SalaryStructure,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a salary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSalary {
    /// The employee the structure belongs to.
    pub employee_id: String,
    /// The compensation structure.
    #[serde(flatten)]
    pub structure: SalaryStructure,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_structure() -> SalaryStructure {
        SalaryStructure {
            wage_type: WageType::Fixed,
            base_wage: Decimal::new(50000, 0),
            basic: SalaryComponent::percentage(Decimal::new(50, 0)),
            hra: SalaryComponent::percentage(Decimal::new(50, 0)),
            standard_allowance: SalaryComponent::fixed(Decimal::new(4000, 0)),
            performance_bonus: SalaryComponent::fixed(Decimal::ZERO),
            lta: SalaryComponent::fixed(Decimal::ZERO),
            fixed_allowance: SalaryComponent::fixed(Decimal::ZERO),
            effective_from: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        }
    }

    #[test]
    fn test_component_kind_uses_type_key() {
        let component = SalaryComponent::percentage(Decimal::new(50, 0));
        let json = serde_json::to_value(component).unwrap();
        assert_eq!(json["type"], "percentage");
        assert_eq!(json["value"], "50");
    }

    #[test]
    fn test_deserialize_component_from_type_key() {
        let component: SalaryComponent =
            serde_json::from_str(r#"{"type": "fixed", "value": "8000"}"#).unwrap();
        assert_eq!(component.kind, ComponentKind::Fixed);
        assert_eq!(component.value, Decimal::new(8000, 0));
    }

    #[test]
    fn test_salary_flattens_structure() {
        let salary = Salary {
            id: "sal_001".to_string(),
            employee_id: "emp_001".to_string(),
            structure: sample_structure(),
            created_at: DateTime::parse_from_rfc3339("2024-04-01T00:00:00Z")
                .unwrap()
                .to_utc(),
        };

        let json = serde_json::to_value(&salary).unwrap();
        assert_eq!(json["wage_type"], "fixed");
        assert_eq!(json["basic"]["type"], "percentage");

        let deserialized: Salary = serde_json::from_value(json).unwrap();
        assert_eq!(salary, deserialized);
    }
}
