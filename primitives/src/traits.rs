/// Account classification flags consulted on every intercepted transfer.
///
/// Implemented by the Market Registry pallet and consumed by the Fee Engine,
/// keeping the fee logic decoupled from how the flags are administered.
pub trait AccountClassifier<AccountId> {
  /// Account is exempt from all transfer fees (either side of a transfer).
  fn is_fee_exempt(who: &AccountId) -> bool;

  /// Account is a recognized trading venue. Transfers to it are sells,
  /// transfers from it are buys.
  fn is_market_pair(who: &AccountId) -> bool;

  /// Account may neither send nor receive.
  fn is_denied(who: &AccountId) -> bool;
}

impl<AccountId> AccountClassifier<AccountId> for () {
  fn is_fee_exempt(_who: &AccountId) -> bool {
    false
  }
  fn is_market_pair(_who: &AccountId) -> bool {
    false
  }
  fn is_denied(_who: &AccountId) -> bool {
    false
  }
}
