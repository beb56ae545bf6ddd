//! Runs the batched scalar multiplication check on random inputs and prints
//! the resulting claim together with the cost counters.

use ark_bn254::Fr;
use ecmul::{
    builder::Builder,
    emulated::EmulatedField,
    engine::BigIntEngine,
    hint::scalar_mul_trace,
    params::{CurveParams, FieldParams, Secp256k1, Secp256k1Fr, Toy163, Toy163Fr},
    ScalarMulCircuit, ScalarMulError,
};
use log::{debug, info};
use num_bigint::{BigUint, RandBigInt};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Instant;

/// Random points `r·G` and scalars, both with `r` and the scalar in
/// `[1, order)`
fn random_inputs<C: CurveParams>(
    rng: &mut StdRng,
    nb_inputs: usize,
) -> (Vec<(BigUint, BigUint)>, Vec<BigUint>) {
    let api = BigIntEngine::new(C::Base::modulus().clone());
    let order = C::Scalar::modulus();
    let (gx, gy) = C::generator();
    let nb_bits = C::Scalar::modulus_bits();
    let b3 = C::b3();

    let mut points = Vec::with_capacity(nb_inputs);
    let mut scalars = Vec::with_capacity(nb_inputs);
    while points.len() < nb_inputs {
        let r = rng.gen_biguint_range(&BigUint::from(1u32), order);
        let trace = scalar_mul_trace(&api, &b3, gx, gy, &r, nb_bits);
        // r is in [1, order) so r·G is never the identity
        if let Some(point) = trace.last().and_then(|(res, _)| res.to_affine(&api)) {
            points.push(point);
            scalars.push(rng.gen_biguint_range(&BigUint::from(1u32), order));
        }
    }
    (points, scalars)
}

fn run<C: CurveParams>(
    nb_inputs: usize,
    nb_scalar_bits: usize,
    seed: u64,
) -> Result<(), ScalarMulError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (points, scalars) = random_inputs::<C>(&mut rng, nb_inputs);
    debug!("generated {nb_inputs} random inputs with seed {seed}");

    let circuit = ScalarMulCircuit::<C, Fr>::from_values(&points, &scalars, nb_scalar_bits)?;
    let mut builder = Builder::<Fr>::new();
    let mut api = EmulatedField::<C::Base, Fr>::new();

    let start = Instant::now();
    let claim = circuit.define(&mut builder, &mut api)?;
    info!(
        "Checked {nb_inputs} scalar multiplications on {} in {:?}",
        C::NAME,
        start.elapsed()
    );
    info!(
        "{} hint calls returning {} values",
        builder.nb_hint_calls(),
        builder.nb_hint_outputs()
    );
    info!(
        "{} multiplications, {} reductions, {} range checked limbs",
        api.nb_mul(),
        api.nb_reductions(),
        api.nb_range_checks()
    );
    info!(
        "{} claims compressed at a point of dimension {}",
        claim.claims.len(),
        claim.eval_point.len()
    );
    println!("{:#x}", claim.claim.value());
    Ok(())
}

pub fn main() {
    // See https://github.com/rust-lang/log
    env_logger::init();

    let arg_curve = clap::arg!(--"curve" <CURVE> "Curve of the scalar multiplications")
        .value_parser(["secp256k1", "toy163"])
        .required(false)
        .default_value("secp256k1");

    let arg_inputs = clap::arg!(--"inputs" <USIZE> "Number of scalar multiplications")
        .value_parser(clap::value_parser!(usize))
        .required(false)
        .default_value("4");

    let arg_scalar_bits = clap::arg!(--"scalar-bits" <USIZE> "Number of bits of each scalar")
        .value_parser(clap::value_parser!(usize))
        .required(false);

    let arg_seed = clap::arg!(--"seed" <U64> "Seed of the random inputs")
        .value_parser(clap::value_parser!(u64))
        .required(false)
        .default_value("0");

    let cmd = clap::Command::new("ecmul")
        .about("Batched scalar multiplication check")
        .arg(arg_curve)
        .arg(arg_inputs)
        .arg(arg_scalar_bits)
        .arg(arg_seed);
    let matches = cmd.get_matches();

    let curve = matches
        .get_one::<String>("curve")
        .expect("clap provides a default curve");
    let nb_inputs = *matches
        .get_one::<usize>("inputs")
        .expect("clap provides a default number of inputs");
    let seed = *matches
        .get_one::<u64>("seed")
        .expect("clap provides a default seed");
    let scalar_bits = matches.get_one::<usize>("scalar-bits").copied();

    let res = match curve.as_str() {
        "secp256k1" => run::<Secp256k1>(
            nb_inputs,
            scalar_bits.unwrap_or_else(Secp256k1Fr::modulus_bits),
            seed,
        ),
        "toy163" => run::<Toy163>(
            nb_inputs,
            scalar_bits.unwrap_or_else(Toy163Fr::modulus_bits),
            seed,
        ),
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(err) = res {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
