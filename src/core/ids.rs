use rand::Rng;
use uuid::Builder;

/// Fresh opaque id for monsters and items.
///
/// Built from the injected RNG rather than the OS so seeded games stay
/// reproducible.
pub fn fresh_id(rng: &mut impl Rng) -> String {
    let bytes: [u8; 16] = rng.gen();
    Builder::from_random_bytes(bytes)
        .into_uuid()
        .simple()
        .to_string()
}
