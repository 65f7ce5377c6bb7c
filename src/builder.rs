use crate::types::ZakatError;

/// Trait for builders that produce a validated value.
pub trait AssetBuilder<T> {
    fn build(self) -> Result<T, ZakatError>;
}

/// Early consistency check run by a builder before it assembles its output.
pub trait Validate {
    fn validate(&self) -> Result<(), ZakatError>;
}
