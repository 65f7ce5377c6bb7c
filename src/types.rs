use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The calendar system a date component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, strum::Display)]
pub enum CalendarSystem {
    Hijri,
    Gregorian,
}

/// Machine-readable classification of a [`ZakatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, strum::Display)]
pub enum ErrorKind {
    InvalidDate,
    InvalidInput,
    OutOfRange,
    Configuration,
    Overflow,
}

/// Errors produced by the calendar, Nisab, Hawl and eligibility computations.
///
/// Every variant carries a diagnostic description only; translating it into a
/// user-facing message is the caller's job.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize, JsonSchema)]
pub enum ZakatError {
    #[error("Invalid {calendar} date: {reason}")]
    InvalidDate {
        calendar: CalendarSystem,
        reason: String,
    },

    #[error("Invalid input for '{field}' ({value}): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("'{field}' value {value} is out of range (expected {expected})")]
    OutOfRange {
        field: String,
        value: i64,
        expected: String,
    },

    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("Arithmetic overflow during '{operation}'")]
    Overflow { operation: String },
}

impl ZakatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ZakatError::InvalidDate { .. } => ErrorKind::InvalidDate,
            ZakatError::InvalidInput { .. } => ErrorKind::InvalidInput,
            ZakatError::OutOfRange { .. } => ErrorKind::OutOfRange,
            ZakatError::ConfigurationError { .. } => ErrorKind::Configuration,
            ZakatError::Overflow { .. } => ErrorKind::Overflow,
        }
    }

    pub(crate) fn hijri_date(reason: impl Into<String>) -> Self {
        ZakatError::InvalidDate {
            calendar: CalendarSystem::Hijri,
            reason: reason.into(),
        }
    }

    pub(crate) fn gregorian_date(reason: impl Into<String>) -> Self {
        ZakatError::InvalidDate {
            calendar: CalendarSystem::Gregorian,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_input(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        ZakatError::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        ZakatError::ConfigurationError { reason: reason.into() }
    }

    pub(crate) fn overflow(operation: impl Into<String>) -> Self {
        ZakatError::Overflow { operation: operation.into() }
    }
}

/// The operation a [`CalculationStep`] performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Initial,
    Add,
    Subtract,
    Compare,
    Rate,
    Result,
    Info,
}

impl Operation {
    fn symbol(&self) -> &'static str {
        match self {
            Operation::Initial | Operation::Info => " ",
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Compare => "?",
            Operation::Rate => "x",
            Operation::Result => "=",
        }
    }
}

/// A single step in the eligibility computation.
///
/// Gives presentation layers a transparent account of how the verdict and
/// the amount due were derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CalculationStep {
    pub description: String,
    pub amount: Option<Decimal>,
    pub operation: Operation,
}

impl CalculationStep {
    fn new(description: impl Into<String>, amount: Option<Decimal>, operation: Operation) -> Self {
        Self {
            description: description.into(),
            amount,
            operation,
        }
    }

    pub fn initial(description: impl Into<String>, amount: Decimal) -> Self {
        Self::new(description, Some(amount), Operation::Initial)
    }

    pub fn add(description: impl Into<String>, amount: Decimal) -> Self {
        Self::new(description, Some(amount), Operation::Add)
    }

    pub fn subtract(description: impl Into<String>, amount: Decimal) -> Self {
        Self::new(description, Some(amount), Operation::Subtract)
    }

    pub fn compare(description: impl Into<String>, amount: Decimal) -> Self {
        Self::new(description, Some(amount), Operation::Compare)
    }

    pub fn rate(description: impl Into<String>, rate: Decimal) -> Self {
        Self::new(description, Some(rate), Operation::Rate)
    }

    pub fn result(description: impl Into<String>, amount: Decimal) -> Self {
        Self::new(description, Some(amount), Operation::Result)
    }

    pub fn info(description: impl Into<String>) -> Self {
        Self::new(description, None, Operation::Info)
    }
}

/// Ordered list of steps, rendered by [`CalculationTrace::explain`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CalculationTrace(pub Vec<CalculationStep>);

impl CalculationTrace {
    pub fn push(&mut self, step: CalculationStep) {
        self.0.push(step);
    }

    pub fn extend(&mut self, steps: impl IntoIterator<Item = CalculationStep>) {
        self.0.extend(steps);
    }

    pub fn steps(&self) -> &[CalculationStep] {
        &self.0
    }

    pub fn contains(&self, description: &str) -> bool {
        self.0.iter().any(|s| s.description.contains(description))
    }

    /// Renders the trace as an aligned, line-per-step table.
    pub fn explain(&self) -> String {
        use std::fmt::Write;

        let width = self
            .0
            .iter()
            .map(|s| s.description.len())
            .max()
            .unwrap_or(20)
            .max(20);

        let mut out = String::new();
        for step in &self.0 {
            // Writing into a String cannot fail.
            let _ = match (step.operation, step.amount) {
                (Operation::Info, _) | (_, None) => writeln!(out, "  INFO: {}", step.description),
                (Operation::Rate, Some(rate)) => writeln!(
                    out,
                    "  {:<width$} : {} {:>12.3}",
                    step.description,
                    step.operation.symbol(),
                    rate,
                ),
                (op, Some(amount)) => writeln!(
                    out,
                    "  {:<width$} : {} {:>12.2}",
                    step.description,
                    op.symbol(),
                    amount,
                ),
            };
        }
        out
    }
}
