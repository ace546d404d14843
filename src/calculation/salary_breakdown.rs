//! Salary component resolution.
//!
//! Resolves a salary structure's six fixed-or-percentage components into
//! concrete currency amounts and a total, validating the total against
//! the base wage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ComponentKind, SalaryComponent, SalaryStructure};

/// The resolved currency amounts of a salary structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Resolved basic pay.
    pub basic: Decimal,
    /// Resolved house rent allowance.
    pub hra: Decimal,
    /// Resolved standard allowance.
    pub standard_allowance: Decimal,
    /// Resolved performance bonus.
    pub performance_bonus: Decimal,
    /// Resolved leave travel allowance.
    pub lta: Decimal,
    /// Resolved fixed allowance.
    pub fixed_allowance: Decimal,
    /// Sum of all six resolved amounts.
    pub total: Decimal,
}

/// Resolves one component against its reference base.
fn resolve_component(component: &SalaryComponent, reference: Decimal) -> Decimal {
    match component.kind {
        ComponentKind::Fixed => component.value,
        ComponentKind::Percentage => {
            (component.value * reference / Decimal::ONE_HUNDRED).round_dp(2)
        }
    }
}

/// Resolves a salary structure into concrete component amounts.
///
/// Percentage components resolve against the base wage, with one
/// exception: HRA resolves against the resolved basic amount. The
/// resolved total must not exceed the base wage; a structure that does is
/// rejected with [`EngineError::SalaryExceedsBaseWage`] before anything
/// is persisted.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use hrflow_engine::calculation::resolve_breakdown;
/// use hrflow_engine::models::{SalaryComponent, SalaryStructure, WageType};
///
/// let structure = SalaryStructure {
///     wage_type: WageType::Fixed,
///     base_wage: Decimal::new(50000, 0),
///     basic: SalaryComponent::percentage(Decimal::new(50, 0)),
///     hra: SalaryComponent::percentage(Decimal::new(50, 0)),
///     standard_allowance: SalaryComponent::fixed(Decimal::ZERO),
///     performance_bonus: SalaryComponent::fixed(Decimal::ZERO),
///     lta: SalaryComponent::fixed(Decimal::ZERO),
///     fixed_allowance: SalaryComponent::fixed(Decimal::ZERO),
///     effective_from: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
/// };
///
/// let breakdown = resolve_breakdown(&structure).unwrap();
/// assert_eq!(breakdown.basic, Decimal::new(25000, 0));
/// // HRA is 50% of the resolved basic, not of the base wage.
/// assert_eq!(breakdown.hra, Decimal::new(12500, 0));
/// assert_eq!(breakdown.total, Decimal::new(37500, 0));
/// ```
pub fn resolve_breakdown(structure: &SalaryStructure) -> EngineResult<SalaryBreakdown> {
    let base_wage = structure.base_wage;

    let basic = resolve_component(&structure.basic, base_wage);
    // HRA references the resolved basic amount.
    let hra = resolve_component(&structure.hra, basic);
    let standard_allowance = resolve_component(&structure.standard_allowance, base_wage);
    let performance_bonus = resolve_component(&structure.performance_bonus, base_wage);
    let lta = resolve_component(&structure.lta, base_wage);
    let fixed_allowance = resolve_component(&structure.fixed_allowance, base_wage);

    let total = basic + hra + standard_allowance + performance_bonus + lta + fixed_allowance;

    if total > base_wage {
        return Err(EngineError::SalaryExceedsBaseWage { total, base_wage });
    }

    Ok(SalaryBreakdown {
        basic,
        hra,
        standard_allowance,
        performance_bonus,
        lta,
        fixed_allowance,
        total,
    })
}
