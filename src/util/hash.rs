/// The multiplier of the polynomial string hash shared by both hash tables.
pub(crate) const HASH_MULTIPLIER: u64 = 31;

/// Hashes `key` byte by byte as `h = (h * 31 + byte) mod modulus`, reducing at every step so that
/// the intermediate value never exceeds `modulus * 31 + 255`.
///
/// Returns 0 for a `modulus` of 0 rather than dividing by zero.
pub(crate) fn polynomial_hash(key: &str, modulus: usize) -> usize {
    let modulus = modulus as u64;
    if modulus == 0 { return 0; }

    key.bytes().fold(0_u64, |hash, byte| {
        (hash * HASH_MULTIPLIER + byte as u64) % modulus
    }) as usize
}
