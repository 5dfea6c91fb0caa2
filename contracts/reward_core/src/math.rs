use primitive_types::U256;

use crate::LedgerError;

/// `a × b / denominator`, rounded toward zero.
///
/// The product is formed in 256 bits, so only a quotient outside `i128`
/// reports [`LedgerError::Overflow`]. A tiny pool can drive
/// `acc_reward_per_share` far past the point where `amount × acc` fits in
/// `i128` while the settled reward itself stays small.
///
/// Operands must be non-negative and `denominator` positive.
pub fn mul_div(a: i128, b: i128, denominator: i128) -> Result<i128, LedgerError> {
    if a < 0 || b < 0 || denominator <= 0 {
        return Err(LedgerError::InvalidAmount);
    }

    let product = U256::from(a.unsigned_abs()) * U256::from(b.unsigned_abs());
    let quotient = product / U256::from(denominator.unsigned_abs());

    if quotient.bits() > 127 {
        return Err(LedgerError::Overflow);
    }
    Ok(quotient.low_u128() as i128)
}
