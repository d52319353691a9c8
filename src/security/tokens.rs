use anyhow::anyhow;
use hex::ToHex;
use rand_core::{OsRng, RngCore};

/// Generates a hex encoded random token from the specified number of random bytes.
pub fn random_token(size: usize) -> anyhow::Result<String> {
    let mut bytes = vec![0u8; size];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|err| anyhow!("Failed to generate random token: {err}"))?;

    Ok(bytes.encode_hex::<String>())
}

/// Compares two tokens in constant time.
pub fn tokens_match(left: &str, right: &str) -> bool {
    left.len() == right.len() && openssl::memcmp::eq(left.as_bytes(), right.as_bytes())
}
