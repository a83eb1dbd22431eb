//! Bit-length-derived resource bounds.
//!
//! The original system built a decorative quantum circuit that was never
//! executed. What survives here is the arithmetic it reported, as a pure
//! summary type plus a logging hook; nothing is simulated.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Cap applied to [`ResourceEstimate::simulated_qubits`].
pub const SIMULATED_QUBIT_CAP: u64 = 32;

/// Derived resource bounds for a value of a given bit length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEstimate {
    /// Bit length of the value (0 for the value 0).
    pub bit_length: u64,
    /// `2^bit_length + 1`, saturating at `u64::MAX`.
    pub qubit_bound: u64,
    /// `bit_length + 1`.
    pub operation_bound: u64,
    /// `qubit_bound` capped at [`SIMULATED_QUBIT_CAP`].
    pub simulated_qubits: u64,
}

impl ResourceEstimate {
    /// Compute the estimate for `n`.
    #[must_use]
    pub fn for_value(n: &BigUint) -> Self {
        let bit_length = n.bits();
        let qubit_bound = 1u64
            .checked_shl(u32::try_from(bit_length).unwrap_or(u32::MAX))
            .and_then(|q| q.checked_add(1))
            .unwrap_or(u64::MAX);
        Self {
            bit_length,
            qubit_bound,
            operation_bound: bit_length.saturating_add(1),
            simulated_qubits: qubit_bound.min(SIMULATED_QUBIT_CAP),
        }
    }

    /// Emit the estimate at debug level. No other side effects.
    pub fn log(&self) {
        tracing::debug!(
            bit_length = self.bit_length,
            qubit_bound = self.qubit_bound,
            operation_bound = self.operation_bound,
            simulated_qubits = self.simulated_qubits,
            "resource estimate"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_value() {
        // 13751 has 14 bits; 2^14 + 1 = 16385.
        let est = ResourceEstimate::for_value(&BigUint::from(13751u32));
        assert_eq!(est.bit_length, 14);
        assert_eq!(est.qubit_bound, 16385);
        assert_eq!(est.operation_bound, 15);
        assert_eq!(est.simulated_qubits, SIMULATED_QUBIT_CAP);
    }

    #[test]
    fn tiny_value_under_cap() {
        let est = ResourceEstimate::for_value(&BigUint::from(3u32));
        assert_eq!(est.bit_length, 2);
        assert_eq!(est.qubit_bound, 5);
        assert_eq!(est.simulated_qubits, 5);
    }

    #[test]
    fn zero_value() {
        let est = ResourceEstimate::for_value(&BigUint::from(0u32));
        assert_eq!(est.bit_length, 0);
        assert_eq!(est.qubit_bound, 2);
        assert_eq!(est.operation_bound, 1);
    }

    #[test]
    fn large_value_saturates() {
        let n = BigUint::from(1u32) << 200;
        let est = ResourceEstimate::for_value(&n);
        assert_eq!(est.bit_length, 201);
        assert_eq!(est.qubit_bound, u64::MAX);
        assert_eq!(est.simulated_qubits, SIMULATED_QUBIT_CAP);
    }

    #[test]
    fn serde_round_trip() {
        let est = ResourceEstimate::for_value(&BigUint::from(42u32));
        let json = serde_json::to_string(&est).unwrap();
        let back: ResourceEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, est);
    }
}
