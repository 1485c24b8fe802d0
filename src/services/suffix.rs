const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

// Generate a pseudo-random alphanumeric string from a seed. Same seed, same
// output; no clock or entropy involved.
pub fn suffix(seed: &str, length: usize) -> String {
    // Fold the seed into a signed 32-bit accumulator, one UTF-16 unit at a time.
    let mut hash: i32 = 0;
    for unit in seed.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }

    // The LCG step needs 64-bit room: the product can exceed i32 before the
    // modulo brings it back under 2^31.
    let mut state = i64::from(hash);
    let mut result = String::with_capacity(length);
    for i in 0..length {
        state = (state * 16807 + i as i64) % 2_147_483_647;
        let index = (state.abs() % ALPHABET.len() as i64) as usize;
        result.push(ALPHABET.as_bytes()[index] as char);
    }
    result
}
