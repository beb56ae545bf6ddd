//! Evaluation of multilinear extensions over emulated field elements.

use crate::{
    emulated::{Element, EmulatedField},
    error::PolynomialError,
    params::FieldParams,
};
use ark_ff::PrimeField;

/// Evaluates at `point` the multilinear extension of `values` over the
/// boolean hypercube of dimension `point.len()`.
///
/// `values` are indexed in big endian order: `point[0]` binds the most
/// significant bit of the index. Missing values up to `2^point.len()` are
/// zero, but the point may not have more coordinates than needed to index
/// every value.
pub fn eval_multilinear<P: FieldParams, F: PrimeField>(
    api: &mut EmulatedField<P, F>,
    point: &[Element<P, F>],
    values: &[Element<P, F>],
) -> Result<Element<P, F>, PolynomialError> {
    if values.is_empty() {
        return Err(PolynomialError::Empty);
    }
    // smallest dimension whose hypercube holds every value
    let nb_vars = values.len().next_power_of_two().trailing_zeros() as usize;
    if point.len() < nb_vars {
        return Err(PolynomialError::TooManyValues(values.len(), point.len()));
    }
    if point.len() > nb_vars {
        return Err(PolynomialError::TooManyVariables(point.len(), values.len()));
    }
    let size = 1usize << point.len();

    let mut evals = values.to_vec();
    evals.resize(size, api.zero());
    for at in point {
        let mid = evals.len() / 2;
        let (low, high) = evals.split_at(mid);
        evals = low
            .iter()
            .zip(high)
            .map(|(l, h)| {
                let diff = api.sub(h, l);
                let scaled = api.mul(&diff, at);
                api.add(l, &scaled)
            })
            .collect();
    }
    // a single value remains once every variable is bound
    Ok(evals.swap_remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Toy163Fp;
    use ark_bn254::Fr;
    use num_bigint::BigUint;

    type Toy = EmulatedField<Toy163Fp, Fr>;

    fn elements(api: &Toy, values: &[u32]) -> Vec<Element<Toy163Fp, Fr>> {
        values
            .iter()
            .map(|v| api.constant(&BigUint::from(*v)))
            .collect()
    }

    #[test]
    fn test_first_coordinate_binds_high_bit() {
        let mut api = Toy::new();
        // f(a, b) = 1 + 2a + b
        let values = elements(&api, &[1, 2, 3, 4]);
        let point = elements(&api, &[3, 5]);
        let res = eval_multilinear(&mut api, &point, &values).unwrap();
        assert_eq!(res.value(), BigUint::from(12u32));
    }

    #[test]
    fn test_hypercube_points() {
        let mut api = Toy::new();
        let values = elements(&api, &[10, 20, 30, 40]);
        for (idx, expected) in [10u32, 20, 30, 40].into_iter().enumerate() {
            let point = elements(&api, &[(idx >> 1) as u32, (idx & 1) as u32]);
            let res = eval_multilinear(&mut api, &point, &values).unwrap();
            assert_eq!(res.value(), BigUint::from(expected));
        }
    }

    #[test]
    fn test_zero_padding() {
        let mut api = Toy::new();
        // padded to [1, 2, 3, 0]: f(a, b) = 1 + 2a + b(1 - 4a)
        let values = elements(&api, &[1, 2, 3]);
        let point = elements(&api, &[3, 5]);
        let res = eval_multilinear(&mut api, &point, &values).unwrap();
        assert_eq!(res.value(), BigUint::from(115u32));
    }

    #[test]
    fn test_single_value() {
        let mut api = Toy::new();
        let values = elements(&api, &[42]);
        let res = eval_multilinear(&mut api, &[], &values).unwrap();
        assert_eq!(res.value(), BigUint::from(42u32));
    }

    #[test]
    fn test_errors() {
        let mut api = Toy::new();
        let point = elements(&api, &[3, 5]);
        assert_eq!(
            eval_multilinear(&mut api, &point, &[]),
            Err(PolynomialError::Empty)
        );
        let values = elements(&api, &[1, 2, 3, 4, 5]);
        assert_eq!(
            eval_multilinear(&mut api, &point, &values),
            Err(PolynomialError::TooManyValues(5, 2))
        );
    }

    #[test]
    fn test_point_larger_than_values() {
        let mut api = Toy::new();
        let values = elements(&api, &[1, 2]);
        let point = elements(&api, &[3, 5]);
        assert_eq!(
            eval_multilinear(&mut api, &point, &values),
            Err(PolynomialError::TooManyVariables(2, 2))
        );
        // a huge point is rejected before anything is allocated
        let point = vec![api.one(); 40];
        assert_eq!(
            eval_multilinear(&mut api, &point, &values[..1]),
            Err(PolynomialError::TooManyVariables(40, 1))
        );
    }
}
