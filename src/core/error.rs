use thiserror::Error;

/// Failures of the strict battle entry point.
///
/// These signal a mis-assembled line-up, not a runtime condition: the primary
/// entry point partitions the roster itself and can never produce them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleError {
    #[error("Decepticon found in the Autobot line-up")]
    TraitorDecepticon,

    #[error("Autobot found in the Decepticon line-up")]
    TraitorAutobot,
}

pub type Result<T> = std::result::Result<T, BattleError>;
