//! Account balance reported by the gateway

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::BALANCE_DECIMALS;

/// Prepaid account balance including VAT, in the account currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub total_including_vat: f64,
}

impl AccountBalance {
    pub fn new(total_including_vat: f64) -> Self {
        Self { total_including_vat }
    }

    /// Balance rendered with two decimal places, e.g. `"12.50"`.
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AccountBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", BALANCE_DECIMALS, self.total_including_vat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_two_decimal_places() {
        assert_eq!(AccountBalance::new(12.5).formatted(), "12.50");
        assert_eq!(AccountBalance::new(0.0).formatted(), "0.00");
        assert_eq!(AccountBalance::new(3.14159).formatted(), "3.14");
    }
}
