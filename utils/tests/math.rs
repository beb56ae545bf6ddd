use ecmul_utils::math::floor_log2;

#[test]
fn test_floor_log2() {
    let tests = [
        (1, 0),
        (2, 1),
        (3, 1),
        (6, 2),
        (9, 3),
        (1024, 10),
        (1025, 10),
        (15430, 13),
        (usize::MAX, 63),
    ];
    for (d, expected) in tests.iter() {
        let res = floor_log2(*d);
        println!("floor(log2({d})) = {res}, expected = {expected}");
        assert_eq!(res, *expected);
    }
}

#[test]
#[should_panic]
fn test_floor_log2_zero() {
    floor_log2(0);
}
