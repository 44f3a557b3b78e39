use rand::rngs::OsRng;
use rand::RngCore;

use super::entry::MAX_SLUG_BYTES;

/// Random hex id drawn from the OS CSPRNG, `bytes` long before encoding.
///
/// Collisions overwrite silently, so the default 4 bytes only suits
/// low-volume stores with short-lived entries.
pub fn generate(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes.clamp(1, MAX_SLUG_BYTES)];
    OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}
