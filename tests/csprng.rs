use rand::RngCore;
use shamir::rng::Csprng;

#[test]
fn test_csprng_deterministic_from_seed() {
    let mut rng1 = Csprng::from_seed([0x42u8; 32]);
    let mut rng2 = Csprng::from_seed([0x42u8; 32]);

    let mut a = [0u8; 128];
    let mut b = [0u8; 128];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_eq!(a, b);
}

#[test]
fn test_csprng_successive_outputs_differ() {
    let mut rng = Csprng::from_seed([0xAAu8; 32]);

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    rng.fill_bytes(&mut a);
    rng.fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn test_csprng_not_all_zero() {
    let mut rng = Csprng::from_seed([0u8; 32]);

    let mut out = [0u8; 64];
    rng.fill_bytes(&mut out);

    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn test_csprng_from_os_differs() {
    let mut rng1 = Csprng::from_os().unwrap();
    let mut rng2 = Csprng::new().unwrap();

    let mut a = [0u8; 32];
    let mut b = [0u8; 32];

    rng1.try_fill_bytes(&mut a).unwrap();
    rng2.try_fill_bytes(&mut b).unwrap();

    assert_ne!(a, b);
}
