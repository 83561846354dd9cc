use rand::rngs::OsRng;
use rand::RngCore;

/// Raw entropy per confirmation token; hex-encoding doubles the length.
const TOKEN_BYTES: usize = 32;

/// Opaque confirmation token issued at registration and later consumed by
/// the email-confirmation flow. Uniqueness is probabilistic: 256 bits of
/// CSPRNG output, never checked against existing tokens.
pub fn generate() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
