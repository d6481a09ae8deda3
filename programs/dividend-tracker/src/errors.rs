use anchor_lang::prelude::*;

#[error_code]
pub enum DividendTrackerError {
    #[msg("Claim wait must be between 1 and 24 hours and differ from the current value")]
    InvalidClaimWait,

    #[msg("Cost per iteration must be greater than zero and differ from the current value")]
    InvalidCostPerIteration,

    #[msg("No shares outstanding - nothing to distribute against")]
    NoShares,

    #[msg("No dividends available to withdraw")]
    NothingToWithdraw,

    #[msg("Registry index out of range")]
    IndexOutOfRange,

    #[msg("Caller is not the tracker authority")]
    Unauthorized,

    #[msg("Account is already excluded from dividends")]
    AlreadyExcluded,

    #[msg("Holder account does not match the registry entry")]
    InvalidHolderAccount,

    #[msg("Recipient cannot receive the dividend payout")]
    PayoutRejected,

    #[msg("Holder registry is full")]
    RegistryFull,

    #[msg("Registry account is too small or already bound")]
    InvalidRegistryAccount,

    #[msg("Arithmetic overflow in dividend calculation")]
    ArithmeticOverflow,
}
