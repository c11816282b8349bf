use integration_tests::native_factorial;
use tally_bigint::{BigInt, Error, Sign};

#[test]
fn factorials_match_native_then_exceed_it() {
    for n in 0..=30_u32 {
        let exact = BigInt::from(n).factorial().unwrap();
        assert_eq!(exact.to_string(), native_factorial(n).to_string(), "{n}!");
    }

    assert_eq!(BigInt::from(10).factorial().unwrap().to_i64(), Ok(3_628_800));
    assert_eq!(
        BigInt::from(25).factorial().unwrap().pretty(),
        "15,511,210,043,330,985,984,000,000"
    );
    assert_eq!(
        BigInt::from(30).factorial().unwrap().to_i64(),
        Err(Error::Overflow)
    );
}

#[test]
fn powers_and_identities() {
    let two = BigInt::from(2);
    assert_eq!(two.power(&BigInt::from(10)).unwrap(), BigInt::from(1024));
    assert_eq!(
        two.power(&BigInt::from(100)).unwrap().to_string(),
        "1267650600228229401496703205376"
    );
    assert_eq!(BigInt::from(5).power(&BigInt::from(0)).unwrap(), BigInt::from(1));
    assert_eq!(
        BigInt::from(-7).power(&BigInt::from(21)).unwrap().to_i64(),
        Ok(-558_545_864_083_284_007)
    );
    assert!(matches!(
        BigInt::from(0).power(&BigInt::from(0)),
        Err(Error::InvalidExponent { .. })
    ));
    assert!(matches!(
        two.power(&BigInt::from(-1)),
        Err(Error::InvalidExponent { .. })
    ));
}

#[test]
fn long_division_with_mixed_signs() {
    let a: BigInt = "98765432109876543210987654321".parse().unwrap();
    let b: BigInt = "-1234567890123".parse().unwrap();

    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q.to_i64(), Ok(-80_000_000_729_029_606));
    assert_eq!(r.to_i64(), Ok(694_365_672_783));
    assert_eq!(&q * &b + &r, a);

    assert_eq!(a.divide(&BigInt::from(0)), Err(Error::DivisionByZero));
    assert_eq!(a.modulo(&BigInt::from(0)), Err(Error::DivisionByZero));
}

#[test]
fn arithmetic_across_bases() {
    let binary = BigInt::from(1_000_000).rebase(2).unwrap();
    let wide = BigInt::from(-999).rebase(1_000).unwrap();

    let sum = &binary + &wide;
    assert_eq!(sum.base(), 1_000);
    assert_eq!(sum.to_i64(), Ok(999_001));
    assert_eq!(sum.rebase(10).unwrap().to_string(), "999001");

    assert!(binary.greater_than(&wide));
    assert_eq!(binary, BigInt::from(1_000_000));
}

#[test]
fn rebase_to_wide_base_uses_delimiter() {
    let n = BigInt::from(2).power(&BigInt::from(64)).unwrap();
    let hex = n.rebase(16).unwrap();

    assert_eq!(hex.to_string(), "1:0:0:0:0:0:0:0:0:0:0:0:0:0:0:0:0");
    assert_eq!(hex.digits().len(), 17);
    assert_eq!(hex.rebase(10).unwrap().to_string(), "18446744073709551616");
}

#[test]
fn construction_is_validated_and_normalized() {
    assert_eq!(
        BigInt::from_digits(vec![0, 0], Sign::Negative, 10).unwrap(),
        BigInt::from(0)
    );
    assert_eq!("-000".parse::<BigInt>().unwrap().sign(), Sign::Positive);
    assert!(matches!(
        "12a".parse::<BigInt>(),
        Err(Error::Format { .. })
    ));
    assert!(matches!(
        BigInt::from_digits(vec![2], Sign::Positive, 2),
        Err(Error::InvalidDigit { digit: 2, base: 2 })
    ));
    assert!(matches!(
        BigInt::from(5).rebase(1),
        Err(Error::InvalidBase { base: 1 })
    ));
    assert!(matches!(
        BigInt::from(-3).factorial(),
        Err(Error::InvalidArgument { .. })
    ));
}
