use std::fmt;

use tracing::{debug, trace};

use crate::error::{StateError, StateResult};
use crate::transform::Transform;
use crate::{C64, MAX_QUBITS, NORM_TOLERANCE};

/// Result of handing a transform to [`QubitRegister::apply`].
///
/// Rejection is not an error: callers that do not care may ignore the value
/// and the register simply keeps its previous state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Applied {
    Committed,
    Rejected { total_probability: f64 },
}

impl Applied {
    pub fn is_committed(&self) -> bool {
        matches!(self, Applied::Committed)
    }
}

/// Joint state of `n` qubits held as `2^n` complex amplitudes.
///
/// The amplitude buffer is owned here and never lent out mutably; reads go
/// through copies ([`amplitude`](Self::amplitude), [`snapshot`](Self::snapshot))
/// or probabilities.
#[derive(Debug)]
pub struct QubitRegister {
    qubits: usize,
    amplitudes: Vec<C64>,
    rejected: u64,
}

impl QubitRegister {
    /// Allocates a register in the all-zero basis state `|0…0>`.
    pub fn new(qubits: usize) -> StateResult<Self> {
        if qubits == 0 {
            return Err(StateError::NoQubits);
        }
        if qubits > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                requested: qubits,
                max: MAX_QUBITS,
            });
        }
        Ok(Self::zeroed(qubits))
    }

    /// `qubits` must already be within `1..=MAX_QUBITS`.
    fn zeroed(qubits: usize) -> Self {
        let mut amplitudes = vec![C64::new(0.0, 0.0); 1usize << qubits];
        amplitudes[0] = C64::new(1.0, 0.0);

        let reg = Self {
            qubits,
            amplitudes,
            rejected: 0,
        };
        debug!(qubits, "initialized qubit register in {} state", reg.basis_label(0));
        reg
    }

    /// Number of qubits `n`.
    pub fn size(&self) -> usize {
        self.qubits
    }

    /// Number of amplitudes, `2^n`.
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Runs `transform` over the current amplitudes and commits the result
    /// when `|1 - Σ|c_i|²| < NORM_TOLERANCE`. Otherwise the state is left
    /// untouched and the rejection is only counted.
    ///
    /// # Panics
    ///
    /// If the transform returns a vector whose length differs from
    /// [`dimension`](Self::dimension).
    pub fn apply<T>(&mut self, transform: &T) -> Applied
    where
        T: Transform + ?Sized,
    {
        let candidate = transform.transform(&self.amplitudes);
        assert_eq!(
            candidate.len(),
            self.amplitudes.len(),
            "transform returned {} amplitudes for a register of dimension {}",
            candidate.len(),
            self.amplitudes.len()
        );

        let total: f64 = candidate.iter().map(|a| a.norm_sqr()).sum();
        if (1.0 - total).abs() < NORM_TOLERANCE {
            self.amplitudes = candidate;
            Applied::Committed
        } else {
            self.rejected += 1;
            trace!(total, "transform rejected, state unchanged");
            Applied::Rejected {
                total_probability: total,
            }
        }
    }

    /// How many transforms have been dropped by the normalization check.
    pub fn rejected_transforms(&self) -> u64 {
        self.rejected
    }

    pub fn amplitude(&self, index: usize) -> Option<C64> {
        self.amplitudes.get(index).copied()
    }

    /// Born-rule probability `|a_i|²`; zero for indices outside the register.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes.get(index).map_or(0.0, |a| a.norm_sqr())
    }

    pub fn probabilities(&self) -> impl Iterator<Item = f64> + '_ {
        self.amplitudes.iter().map(|a| a.norm_sqr())
    }

    pub fn total_probability(&self) -> f64 {
        self.probabilities().sum()
    }

    /// Owned copy of the amplitude vector.
    pub fn snapshot(&self) -> Vec<C64> {
        self.amplitudes.clone()
    }

    /// Ket label of a basis index, most significant qubit first: `|010>`.
    pub fn basis_label(&self, index: usize) -> String {
        let mut s = String::with_capacity(self.qubits + 2);
        s.push('|');
        for p in (0..self.qubits).rev() {
            s.push(if (index >> p) & 1 == 1 { '1' } else { '0' });
        }
        s.push('>');
        s
    }
}

impl Default for QubitRegister {
    /// A single qubit in `|0>`.
    fn default() -> Self {
        Self::zeroed(1)
    }
}

/// Lists the basis states with non-negligible amplitude, one per line.
impl fmt::Display for QubitRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, a) in self.amplitudes.iter().enumerate() {
            if a.norm_sqr() < 1e-12 {
                continue;
            }
            writeln!(
                f,
                "{} {:+.6}{:+.6}i  p={:.6}",
                self.basis_label(i),
                a.re,
                a.im,
                a.norm_sqr()
            )?;
        }
        Ok(())
    }
}
