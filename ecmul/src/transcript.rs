//! Fiat-Shamir transcript deriving the challenges of the check.
//!
//! Challenges are declared up front, in order. Values are bound to a
//! challenge before it is computed; computing a challenge hashes its label,
//! the digest of the previous challenge (except for the first one) and its
//! bindings in the order they were made, each prefixed by its length.
//! Binding to a computed challenge is an error, so every challenge is fixed
//! only after all the values it must be sound against.

use crate::error::TranscriptError;
use ark_ff::PrimeField;
use blake2::{Blake2b512, Digest};
use core::marker::PhantomData;
use log::debug;

/// Label of the challenge combining the coordinates of a step
pub const ALPHA: &str = "alpha";

/// Label of the challenge building the multilinear evaluation point
pub const BETA: &str = "beta";

/// A transcript deriving challenges in the native field `F`
pub trait Transcript<F> {
    /// Binds `bytes` to the challenge `label`
    fn bind(&mut self, label: &str, bytes: &[u8]) -> Result<(), TranscriptError>;

    /// Derives the challenge `label`. Computing an already computed
    /// challenge returns the same value.
    fn compute_challenge(&mut self, label: &str) -> Result<F, TranscriptError>;
}

#[derive(Clone, Debug)]
struct Challenge {
    label: String,
    bindings: Vec<Vec<u8>>,
    digest: Option<Vec<u8>>,
}

/// A [Transcript] hashing with BLAKE2b-512 and reducing the digest into `F`
#[derive(Clone, Debug)]
pub struct Blake2bTranscript<F: PrimeField> {
    challenges: Vec<Challenge>,
    _marker: PhantomData<F>,
}

impl<F: PrimeField> Blake2bTranscript<F> {
    /// Declares the challenges, in the order they must be computed
    pub fn new(labels: &[&str]) -> Self {
        let challenges = labels
            .iter()
            .map(|label| Challenge {
                label: label.to_string(),
                bindings: vec![],
                digest: None,
            })
            .collect();
        Self {
            challenges,
            _marker: PhantomData,
        }
    }

    fn position(&self, label: &str) -> Result<usize, TranscriptError> {
        self.challenges
            .iter()
            .position(|c| c.label == label)
            .ok_or_else(|| TranscriptError::UnknownLabel(label.to_string()))
    }
}

impl<F: PrimeField> Transcript<F> for Blake2bTranscript<F> {
    fn bind(&mut self, label: &str, bytes: &[u8]) -> Result<(), TranscriptError> {
        let pos = self.position(label)?;
        let challenge = &mut self.challenges[pos];
        if challenge.digest.is_some() {
            return Err(TranscriptError::AlreadyComputed(label.to_string()));
        }
        challenge.bindings.push(bytes.to_vec());
        Ok(())
    }

    fn compute_challenge(&mut self, label: &str) -> Result<F, TranscriptError> {
        let pos = self.position(label)?;
        if let Some(digest) = &self.challenges[pos].digest {
            return Ok(F::from_le_bytes_mod_order(digest));
        }

        let mut hasher = Blake2b512::new();
        // the label acts as a domain separator
        hasher.update(label.as_bytes());
        if pos == 0 {
            if self.challenges[pos].bindings.is_empty() {
                return Err(TranscriptError::NoBindings(label.to_string()));
            }
        } else {
            let previous = self.challenges[pos - 1]
                .digest
                .as_ref()
                .ok_or_else(|| TranscriptError::PreviousNotComputed(label.to_string()))?;
            hasher.update(previous);
        }
        for binding in &self.challenges[pos].bindings {
            hasher.update((binding.len() as u64).to_le_bytes());
            hasher.update(binding);
        }
        let digest = hasher.finalize().to_vec();
        debug!(
            "challenge {label} computed over {} bindings",
            self.challenges[pos].bindings.len()
        );

        let res = F::from_le_bytes_mod_order(&digest);
        self.challenges[pos].digest = Some(digest);
        Ok(res)
    }
}
