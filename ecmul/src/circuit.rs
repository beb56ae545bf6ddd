//! The batched scalar multiplication check.
//!
//! For each pair `(P, s)` the double-and-add trace of `s·P` is requested from
//! [hint::scalar_mul_steps] and imported as range checked emulated elements.
//! The six coordinates of every step are folded into one claim with powers of
//! the challenge `alpha`, and all claims are compressed into a single
//! evaluation of their multilinear extension at `(beta, beta², …, beta^k)`.
//!
//! Both challenges are derived after every pair has been bound to the
//! transcript, so the prover cannot choose the trace depending on them.

use crate::{
    builder::Builder,
    curve::{marshal_scalar, AffinePoint, EmulatedPoint, TraceStep},
    emulated::{modulus_limbs, Element, EmulatedField},
    error::{PolynomialError, ScalarMulError},
    hint::{self, COORDINATES_PER_STEP},
    params::{CurveParams, FieldParams},
    polynomial::eval_multilinear,
    transcript::{Blake2bTranscript, Transcript, ALPHA, BETA},
};
use ark_ff::PrimeField;
use ecmul_utils::math::floor_log2;
use log::debug;
use num_bigint::BigUint;

/// Output of the check: the folded claims and their compression
#[derive(Clone, Debug)]
pub struct ScalarMulClaim<B: FieldParams, F: PrimeField> {
    /// All imported steps, pair by pair then bit by bit
    pub steps: Vec<TraceStep<B, F>>,
    /// One folded claim per step
    pub claims: Vec<Element<B, F>>,
    /// `(beta, beta², …, beta^k)`
    pub eval_point: Vec<Element<B, F>>,
    /// Evaluation of the multilinear extension of the claims at `eval_point`
    pub claim: Element<B, F>,
}

/// A batch of scalar multiplications on the curve `C`, emulated over the
/// native field `F`
#[derive(Clone, Debug)]
pub struct ScalarMulCircuit<C: CurveParams, F: PrimeField> {
    pub points: Vec<AffinePoint<C::Base, F>>,
    pub scalars: Vec<Element<C::Scalar, F>>,
    /// Number of double-and-add steps per scalar
    pub nb_scalar_bits: usize,
}

impl<C: CurveParams, F: PrimeField> ScalarMulCircuit<C, F> {
    /// Assigns the witness from affine coordinates and scalars
    pub fn from_values(
        points: &[(BigUint, BigUint)],
        scalars: &[BigUint],
        nb_scalar_bits: usize,
    ) -> Result<Self, ScalarMulError> {
        let points = points
            .iter()
            .map(|(x, y)| AffinePoint::from_biguint(x, y))
            .collect::<Result<Vec<_>, _>>()?;
        let scalars = scalars
            .iter()
            .map(Element::from_biguint)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            points,
            scalars,
            nb_scalar_bits,
        })
    }

    /// Runs the check with a BLAKE2b transcript over the challenges
    /// `alpha` and `beta`
    pub fn define(
        &self,
        builder: &mut Builder<F>,
        api: &mut EmulatedField<C::Base, F>,
    ) -> Result<ScalarMulClaim<C::Base, F>, ScalarMulError> {
        let mut transcript = Blake2bTranscript::<F>::new(&[ALPHA, BETA]);
        self.define_with_transcript(builder, api, &mut transcript)
    }

    /// Runs the check, deriving the challenges from `transcript`
    pub fn define_with_transcript<T: Transcript<F>>(
        &self,
        builder: &mut Builder<F>,
        api: &mut EmulatedField<C::Base, F>,
        transcript: &mut T,
    ) -> Result<ScalarMulClaim<C::Base, F>, ScalarMulError> {
        if self.points.len() != self.scalars.len() {
            return Err(ScalarMulError::ShapeMismatch {
                points: self.points.len(),
                scalars: self.scalars.len(),
            });
        }
        debug!(
            "checking {} scalar multiplications on {} with {} bits",
            self.points.len(),
            C::NAME,
            self.nb_scalar_bits
        );

        let mut steps = Vec::with_capacity(self.points.len() * self.nb_scalar_bits);
        for (point, scalar) in self.points.iter().zip(&self.scalars) {
            transcript.bind(ALPHA, &marshal_scalar(scalar)?)?;
            transcript.bind(ALPHA, &point.marshal()?)?;
            steps.extend(self.call_hint_scalar_mul_steps(builder, api, point, scalar)?);
        }

        let alpha = transcript.compute_challenge(ALPHA)?;
        let alpha_bits = builder.to_binary(alpha, F::MODULUS_BIT_SIZE as usize);
        let alpha = api.from_bits(&alpha_bits);
        let claims = fold_claims(api, &alpha, &steps);
        debug!("folded {} steps", claims.len());

        let beta = transcript.compute_challenge(BETA)?;
        let beta_bits = builder.to_binary(beta, F::MODULUS_BIT_SIZE as usize);
        let beta = api.from_bits(&beta_bits);
        let (eval_point, claim) = compress_claims(api, &beta, &claims)?;
        debug!(
            "compressed {} claims at a point of dimension {}",
            claims.len(),
            eval_point.len()
        );

        Ok(ScalarMulClaim {
            steps,
            claims,
            eval_point,
            claim,
        })
    }

    /// Requests the trace of `scalar·point` and imports it
    fn call_hint_scalar_mul_steps(
        &self,
        builder: &mut Builder<F>,
        api: &mut EmulatedField<C::Base, F>,
        point: &AffinePoint<C::Base, F>,
        scalar: &Element<C::Scalar, F>,
    ) -> Result<Vec<TraceStep<C::Base, F>>, ScalarMulError> {
        let nb_limbs = C::Base::NB_LIMBS;
        let mut inputs = vec![F::from(C::Base::BITS_PER_LIMB as u64), F::from(nb_limbs as u64)];
        inputs.extend(modulus_limbs::<C::Base, F>());
        inputs.extend_from_slice(point.x.limbs());
        inputs.extend_from_slice(point.y.limbs());
        inputs.push(F::from(C::Scalar::BITS_PER_LIMB as u64));
        inputs.push(F::from(C::Scalar::NB_LIMBS as u64));
        inputs.extend(modulus_limbs::<C::Scalar, F>());
        inputs.extend_from_slice(scalar.limbs());

        let nb_outputs = self.nb_scalar_bits * COORDINATES_PER_STEP * nb_limbs;
        let outputs = builder.new_hint(hint::scalar_mul_steps::<C>, nb_outputs, &inputs)?;

        let mut steps = Vec::with_capacity(self.nb_scalar_bits);
        for step in outputs.chunks(COORDINATES_PER_STEP * nb_limbs) {
            let mut coords = step
                .chunks(nb_limbs)
                .map(|limbs| api.new_element(limbs.to_vec()))
                .collect::<Result<Vec<_>, _>>()?
                .into_iter();
            let mut next_point = || -> Option<EmulatedPoint<C::Base, F>> {
                Some(EmulatedPoint {
                    x: coords.next()?,
                    y: coords.next()?,
                    z: coords.next()?,
                })
            };
            // the hint checked the output length, chunks are always complete
            if let (Some(result), Some(acc)) = (next_point(), next_point()) {
                steps.push(TraceStep { result, acc });
            }
        }
        Ok(steps)
    }
}

/// Folds every step into
/// `accX + α·accY + α²·accZ + α³·resX + α⁴·resY + α⁵·resZ`.
///
/// The products are accumulated without reduction and each claim is reduced
/// once.
pub fn fold_claims<B: FieldParams, F: PrimeField>(
    api: &mut EmulatedField<B, F>,
    alpha: &Element<B, F>,
    steps: &[TraceStep<B, F>],
) -> Vec<Element<B, F>> {
    let mut powers = vec![alpha.clone()];
    for i in 1..COORDINATES_PER_STEP - 1 {
        let next = api.mul(&powers[i - 1], alpha);
        powers.push(next);
    }

    steps
        .iter()
        .map(|TraceStep { result, acc }| {
            let coords = [&acc.y, &acc.z, &result.x, &result.y, &result.z];
            let terms: Vec<_> = coords
                .into_iter()
                .zip(&powers)
                .map(|(c, power)| api.mul_no_reduce(c, power))
                .collect();
            let mut summands: Vec<&Element<B, F>> = vec![&acc.x];
            summands.extend(terms.iter());
            let sum = api.sum(&summands);
            api.reduce(&sum)
        })
        .collect()
}

/// Evaluates the multilinear extension of `claims` at
/// `(beta, beta², …, beta^k)` with `k = floor(log2(claims.len()))`.
///
/// Returns the evaluation point and the evaluation.
pub fn compress_claims<B: FieldParams, F: PrimeField>(
    api: &mut EmulatedField<B, F>,
    beta: &Element<B, F>,
    claims: &[Element<B, F>],
) -> Result<(Vec<Element<B, F>>, Element<B, F>), PolynomialError> {
    if claims.is_empty() {
        return Err(PolynomialError::Empty);
    }
    let k = floor_log2(claims.len());
    let mut point = Vec::with_capacity(k);
    if k > 0 {
        point.push(beta.clone());
    }
    for i in 1..k {
        let next = api.mul(&point[i - 1], beta);
        point.push(next);
    }
    let eval = eval_multilinear(api, &point, claims)?;
    Ok((point, eval))
}
