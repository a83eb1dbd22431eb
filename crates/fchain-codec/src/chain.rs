//! Factor-chain encode/decode.
//!
//! A chain is the record of repeatedly dividing a value by its smallest
//! divisor until 1 is reached. The recorded divisors are exactly the prime
//! factorization of the input with multiplicity, smallest first, so decoding
//! is a multiplicative fold and the round trip is an algebraic identity.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::divisor::smallest_divisor;
use crate::error::ChainError;

/// One step of a factor chain.
///
/// `divisor` is `None` only on the terminal step, where `value == 1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The value before this step's division.
    pub value: BigUint,
    /// Smallest divisor of `value`, or `None` on the terminal step.
    pub divisor: Option<BigUint>,
}

/// Ordered sequence of steps from the original value down to the terminal
/// `(1, None)` step.
///
/// Transient: produced by [`encode`], consumed by [`decode`] or serialized
/// by a framing layer. Step order matters for inspection (smallest divisor
/// first), though decoding only requires seeing every divisor exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    steps: Vec<Step>,
}

impl Chain {
    /// Build a chain from raw steps.
    ///
    /// No validation happens here; [`decode`] rejects chains that `encode`
    /// could not have produced.
    #[must_use]
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The steps in encode order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps, terminal step included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Ω(n): number of prime factors with multiplicity, i.e. the number of
    /// non-terminal steps.
    #[must_use]
    pub fn omega(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// The recorded divisors in encode order, terminal step excluded.
    pub fn divisors(&self) -> impl Iterator<Item = &BigUint> {
        self.steps.iter().filter_map(|step| step.divisor.as_ref())
    }
}

/// Encode `n` as a factor chain.
///
/// Repeatedly divides by the smallest divisor until the value reaches 1,
/// then appends the terminal `(1, None)` step. The product of the recorded
/// divisors equals `n`, and the chain holds Ω(n) + 1 steps.
///
/// # Errors
///
/// Returns [`ChainError::InvalidInput`] for n < 2.
pub fn encode(n: &BigUint) -> Result<Chain, ChainError> {
    if n < &BigUint::from(2u32) {
        return Err(ChainError::InvalidInput {
            reason: format!("cannot encode {n}: chain encoding requires n >= 2"),
        });
    }

    let mut steps = Vec::new();
    let mut current = n.clone();
    while !current.is_one() {
        let divisor = smallest_divisor(&current)?;
        let next = &current / &divisor;
        tracing::debug!(
            step = steps.len() + 1,
            value = %current,
            divisor = %divisor,
            result = %next,
            "chain step"
        );
        steps.push(Step {
            value: current,
            divisor: Some(divisor),
        });
        current = next;
    }
    steps.push(Step {
        value: BigUint::one(),
        divisor: None,
    });
    Ok(Chain { steps })
}

/// Decode a chain back to the integer it encodes.
///
/// Traverses the steps in reverse, multiplying the accumulator by every
/// recorded divisor. Never fails on a chain produced by [`encode`].
///
/// # Errors
///
/// Returns [`ChainError::MalformedChain`] when the chain is empty, the
/// terminal `(1, None)` step is missing, a divisor is zero, or a
/// non-terminal step carries no divisor.
pub fn decode(chain: &Chain) -> Result<BigUint, ChainError> {
    let Some(terminal) = chain.steps.last() else {
        return Err(ChainError::MalformedChain {
            reason: "empty chain".into(),
        });
    };
    if terminal.divisor.is_some() || !terminal.value.is_one() {
        return Err(ChainError::MalformedChain {
            reason: "missing terminal (1, None) step".into(),
        });
    }

    let mut acc = BigUint::one();
    for (index, step) in chain.steps.iter().enumerate().rev().skip(1) {
        match &step.divisor {
            None => {
                return Err(ChainError::MalformedChain {
                    reason: format!("missing divisor at non-terminal step {index}"),
                });
            }
            Some(divisor) if divisor.is_zero() => {
                return Err(ChainError::MalformedChain {
                    reason: format!("zero divisor at step {index}"),
                });
            }
            Some(divisor) => acc *= divisor,
        }
    }
    Ok(acc)
}
