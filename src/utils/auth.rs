/// Compare two secrets in constant time.
///
/// Visits every byte of `provided` regardless of where the first mismatch is,
/// so the cost depends only on the provided value's length.
pub fn secrets_match(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();

    let mut diff = u8::from(provided.len() != expected.len());
    for (i, a) in provided.iter().enumerate() {
        let b = expected.get(i).copied().unwrap_or(0);
        diff |= a ^ b;
    }
    diff == 0
}
