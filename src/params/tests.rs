#![allow(clippy::unwrap_used, reason = "allow in test files")]

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use super::*;

#[test]
fn rounding_from_integer() {
    assert_eq!(Rounding::try_from(0).unwrap(), Rounding::Up);
    assert_eq!(Rounding::try_from(1).unwrap(), Rounding::Down);
    assert_eq!(
        Rounding::try_from(2),
        Err(HalfPelError::InvalidRounding(2))
    );
    assert_eq!(
        Rounding::try_from(-1),
        Err(HalfPelError::InvalidRounding(-1))
    );
}

#[test]
fn rounding_from_flag() {
    assert_eq!(Rounding::from(false), Rounding::Up);
    assert_eq!(Rounding::from(true), Rounding::Down);
    assert_eq!(Rounding::default(), Rounding::Up);
}

#[test]
fn rounding_bias_and_toggle() {
    assert_eq!(Rounding::Up.bias(), 0);
    assert_eq!(Rounding::Down.bias(), 1);
    assert_eq!(u32::from(Rounding::Down), 1);
    assert_eq!(Rounding::Up.toggled(), Rounding::Down);
    assert_eq!(Rounding::Down.toggled().toggled(), Rounding::Down);
}

#[test]
fn halfpel_from_vector() {
    assert_eq!(HalfPel::from_vector(0, 0), HalfPel::Full);
    assert_eq!(HalfPel::from_vector(4, -2), HalfPel::Full);
    assert_eq!(HalfPel::from_vector(3, 0), HalfPel::Horizontal);
    assert_eq!(HalfPel::from_vector(-1, 2), HalfPel::Horizontal);
    assert_eq!(HalfPel::from_vector(0, -3), HalfPel::Vertical);
    assert_eq!(HalfPel::from_vector(-5, 7), HalfPel::Diagonal);
}

#[test]
fn halfpel_footprint() {
    assert_eq!(HalfPel::Full.footprint(), (8, 8));
    assert_eq!(HalfPel::Horizontal.footprint(), (9, 8));
    assert_eq!(HalfPel::Vertical.footprint(), (8, 9));
    assert_eq!(HalfPel::Diagonal.footprint(), (9, 9));
}

#[quickcheck]
fn halfpel_integer_round_trip(val: i64) -> TestResult {
    match HalfPel::try_from(val) {
        Ok(phase) => TestResult::from_bool((0..4).contains(&val) && phase as i64 == val),
        Err(e) => TestResult::from_bool(!(0..4).contains(&val) && e == HalfPelError::InvalidHalfPel(val)),
    }
}

#[quickcheck]
fn halfpel_matches_encoded_bits(x: i32, y: i32) -> bool {
    let encoded = i64::from(((y & 1) << 1) | (x & 1));
    HalfPel::try_from(encoded).unwrap() == HalfPel::from_vector(x, y)
}
