use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::inputs::IntoAmount;
use crate::types::{CalculationStep, CalculationTrace, ZakatError};

/// Aggregate figures from the ledger that make up zakatable wealth.
///
/// `net = cash + zakatable_income + investments − debts_due`, floored at zero
/// when debts exceed assets. Components themselves must be non-negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ZakatableWealth {
    pub cash: Decimal,
    pub zakatable_income: Decimal,
    pub investments: Decimal,
    pub debts_due: Decimal,
}

impl ZakatableWealth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cash(mut self, amount: impl IntoAmount) -> Result<Self, ZakatError> {
        self.cash = non_negative("cash", amount)?;
        Ok(self)
    }

    pub fn zakatable_income(mut self, amount: impl IntoAmount) -> Result<Self, ZakatError> {
        self.zakatable_income = non_negative("zakatable_income", amount)?;
        Ok(self)
    }

    pub fn investments(mut self, amount: impl IntoAmount) -> Result<Self, ZakatError> {
        self.investments = non_negative("investments", amount)?;
        Ok(self)
    }

    pub fn debts(mut self, amount: impl IntoAmount) -> Result<Self, ZakatError> {
        self.debts_due = non_negative("debts_due", amount)?;
        Ok(self)
    }

    pub fn gross_assets(&self) -> Result<Decimal, ZakatError> {
        self.cash
            .checked_add(self.zakatable_income)
            .and_then(|sum| sum.checked_add(self.investments))
            .ok_or_else(|| ZakatError::overflow("sum of zakatable assets"))
    }

    pub fn net(&self) -> Result<Decimal, ZakatError> {
        self.validate()?;
        Ok((self.gross_assets()? - self.debts_due).max(Decimal::ZERO))
    }

    /// Fields are public, so values deserialized or assigned directly are
    /// re-checked here.
    pub fn validate(&self) -> Result<(), ZakatError> {
        for (field, value) in [
            ("cash", self.cash),
            ("zakatable_income", self.zakatable_income),
            ("investments", self.investments),
            ("debts_due", self.debts_due),
        ] {
            if value < Decimal::ZERO {
                return Err(ZakatError::invalid_input(field, value, "must be non-negative"));
            }
        }
        Ok(())
    }

    pub(crate) fn trace(&self) -> Result<CalculationTrace, ZakatError> {
        let gross = self.gross_assets()?;
        let mut trace = CalculationTrace::default();
        trace.extend([
            CalculationStep::initial("Cash", self.cash),
            CalculationStep::add("Zakatable Income", self.zakatable_income),
            CalculationStep::add("Investments", self.investments),
            CalculationStep::subtract("Debts Due", self.debts_due),
        ]);
        if self.debts_due > gross {
            trace.push(CalculationStep::info("Debts exceed assets; zakatable wealth is zero"));
        }
        trace.push(CalculationStep::result("Zakatable Wealth", self.net()?));
        Ok(trace)
    }
}

fn non_negative(field: &str, amount: impl IntoAmount) -> Result<Decimal, ZakatError> {
    let value = amount.into_amount(field)?;
    if value < Decimal::ZERO {
        return Err(ZakatError::invalid_input(field, value, "must be non-negative"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_net_wealth() {
        let wealth = ZakatableWealth::new()
            .cash(10_000)
            .and_then(|w| w.zakatable_income("2500.50"))
            .and_then(|w| w.investments(dec!(1500)))
            .and_then(|w| w.debts(1000.5))
            .unwrap();
        assert_eq!(wealth.gross_assets().unwrap(), dec!(14000.50));
        assert_eq!(wealth.net().unwrap(), dec!(13000.00));
    }

    #[test]
    fn test_no_float_drift_in_sums() {
        let wealth = ZakatableWealth::new()
            .cash(0.1)
            .and_then(|w| w.zakatable_income(0.2))
            .unwrap();
        assert_eq!(wealth.net().unwrap(), dec!(0.3));
    }

    #[test]
    fn test_debts_floor_at_zero() {
        let wealth = ZakatableWealth::new().cash(500).and_then(|w| w.debts(900)).unwrap();
        assert_eq!(wealth.net().unwrap(), Decimal::ZERO);
        assert!(wealth.trace().unwrap().contains("Debts exceed assets"));
    }

    #[test]
    fn test_negative_component_rejected() {
        assert!(ZakatableWealth::new().cash(-1).is_err());
        assert!(ZakatableWealth::new().investments(f64::NAN).is_err());

        let tampered = ZakatableWealth { cash: dec!(-5), ..Default::default() };
        assert!(tampered.net().is_err());
    }
}
