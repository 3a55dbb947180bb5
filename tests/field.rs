use shamir::field::{Point, generators, polynomials};
use shamir::{FIELD_AES, FIELD_REED_SOLOMON, FieldError, GaloisField, Gf256};

/// Reference shift-and-add multiplication.
fn slow_multiply(mut a: u8, mut b: u8, polynomial: u16) -> u8 {
    let mut res = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            res ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= (polynomial & 0xFF) as u8;
        }
        b >>= 1;
    }
    res
}

#[test]
fn aes_known_products() {
    // FIPS-197, section 4.2
    assert_eq!(FIELD_AES.multiply(0x57, 0x83), 0xC1);
    assert_eq!(FIELD_AES.multiply(0x57, 0x13), 0xFE);
    assert_eq!(FIELD_AES.inverse(0x53), Some(0xCA));
}

#[test]
fn multiply_matches_reference() {
    for field in [&FIELD_AES, &FIELD_REED_SOLOMON] {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(
                    field.multiply(a, b),
                    slow_multiply(a, b, field.polynomial()),
                    "{a:#04x} * {b:#04x} in {field:?}"
                );
            }
        }
    }
}

#[test]
fn every_nonzero_element_has_an_inverse() {
    for field in [&FIELD_AES, &FIELD_REED_SOLOMON] {
        assert_eq!(field.inverse(0), None);

        for a in 1..=255u8 {
            let inv = field.inverse(a).unwrap();
            assert_eq!(field.multiply(a, inv), 1);
            assert_eq!(field.divide(1, a), Some(inv));
        }
    }
}

#[test]
fn divide_by_zero_is_none() {
    assert_eq!(FIELD_AES.divide(7, 0), None);
    assert_eq!(FIELD_AES.divide(0, 7), Some(0));
}

#[test]
fn exp_and_log_are_inverse() {
    for field in [&FIELD_AES, &FIELD_REED_SOLOMON] {
        assert_eq!(field.exp(0), 1);
        assert_eq!(field.exp(1), field.generator());
        assert_eq!(field.log(0), None);

        for a in 1..=255u8 {
            assert_eq!(field.exp(field.log(a).unwrap()), a);
        }
    }

    // x⁸ reduces to x⁴ + x³ + x² + 1 under 0x11D
    assert_eq!(FIELD_REED_SOLOMON.exp(8), 0x1D);
}

#[test]
fn addition_is_xor() {
    assert_eq!(FIELD_AES.add(0x57, 0x83), 0xD4);
    assert_eq!(FIELD_REED_SOLOMON.add(0xFF, 0xFF), 0);
}

#[test]
fn presets_match_constructor() {
    assert_eq!(Gf256::new(polynomials::AES, generators::AES).unwrap(), FIELD_AES);
    assert_eq!(
        Gf256::new(polynomials::REED_SOLOMON, generators::FAST).unwrap(),
        FIELD_REED_SOLOMON
    );
    assert_eq!(FIELD_AES.polynomial(), 0x11B);
    assert_eq!(FIELD_AES.generator(), 0x03);
    assert_eq!(FIELD_REED_SOLOMON.polynomial(), 0x11D);
    assert_eq!(FIELD_REED_SOLOMON.generator(), 0x02);
}

#[test]
fn constructor_rejects_bad_parameters() {
    assert_eq!(Gf256::new(0xFF, 0x03), Err(FieldError::InvalidPolynomial(0xFF)));
    assert_eq!(Gf256::new(0x21B, 0x03), Err(FieldError::InvalidPolynomial(0x21B)));

    // 0x02 has order 51 in the AES field
    assert_eq!(Gf256::new(0x11B, 0x02), Err(FieldError::InvalidGenerator(0x02)));
    assert_eq!(Gf256::new(0x11B, 0x00), Err(FieldError::InvalidGenerator(0x00)));
    assert_eq!(Gf256::new(0x11B, 0x01), Err(FieldError::InvalidGenerator(0x01)));

    // x⁸ is reducible
    assert_eq!(Gf256::new(0x100, 0x03), Err(FieldError::InvalidGenerator(0x03)));
}

#[test]
fn evaluate_uses_increasing_degree_order() {
    let poly = [0x2A, 0x05, 0x09];

    assert_eq!(FIELD_AES.evaluate(&poly, 0), 0x2A);
    assert_eq!(FIELD_AES.evaluate(&poly, 1), 0x2A ^ 0x05 ^ 0x09);

    let x = 0x07;
    let expected = 0x2A
        ^ FIELD_AES.multiply(0x05, x)
        ^ FIELD_AES.multiply(0x09, FIELD_AES.multiply(x, x));
    assert_eq!(FIELD_AES.evaluate(&poly, x), expected);
}

#[test]
fn interpolate_recovers_polynomial() {
    for field in [&FIELD_AES, &FIELD_REED_SOLOMON] {
        let poly = [0xC3, 0x11, 0x7E, 0x90];
        let points: Vec<Point> = [3u8, 9, 1, 200]
            .into_iter()
            .map(|x| Point::new(x, field.evaluate(&poly, x)))
            .collect();

        assert_eq!(field.interpolate(&points, 0), Ok(0xC3));
        assert_eq!(field.interpolate(&points, 42), Ok(field.evaluate(&poly, 42)));
    }
}

#[test]
fn xor_closed_points_interpolate_alike_in_every_field() {
    let points = [Point::new(1, 0x3C), Point::new(2, 0xA7), Point::new(3, 0x51)];

    for field in [&FIELD_AES, &FIELD_REED_SOLOMON] {
        assert_eq!(field.interpolate(&points, 0), Ok(0x3C ^ 0xA7 ^ 0x51));
    }
}

#[test]
fn interpolate_single_point_is_constant() {
    let points = [Point::new(5, 0x99)];
    assert_eq!(FIELD_AES.interpolate(&points, 0), Ok(0x99));
}

#[test]
fn interpolate_rejects_duplicate_x() {
    let points = [Point::new(1, 10), Point::new(2, 20), Point::new(2, 30)];
    assert_eq!(FIELD_AES.interpolate(&points, 0), Err(FieldError::DuplicatePoint(2)));
}

#[test]
fn interpolate_rejects_empty_points() {
    assert_eq!(FIELD_AES.interpolate(&[], 0), Err(FieldError::NoPoints));
}

#[test]
fn fields_are_usable_as_trait_objects() {
    let fields: [&dyn GaloisField; 2] = [&FIELD_AES, &FIELD_REED_SOLOMON];
    let poly = [0x01, 0x02];

    assert_ne!(fields[0].evaluate(&poly, 0x80), fields[1].evaluate(&poly, 0x80));
}
