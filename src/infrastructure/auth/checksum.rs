//! Digest for the admin password gate.

/// Computes the gate checksum of a secret: a 32-bit wrapping string hash
/// over UTF-16 code units, rendered in signed base 36.
///
/// This is deliberately NOT a cryptographic hash. The gate is a deterrent
/// against casual visitors opening the admin overlay; the checksum can be
/// brute-forced and is stored alongside the content it protects. Known
/// limitation, kept on purpose. The exact algorithm also keeps checksums
/// stored by earlier deployments valid.
pub fn compute_checksum(secret: &str) -> String {
    let mut hash: i32 = 0;
    for unit in secret.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    to_base36(hash)
}

fn to_base36(value: i32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let negative = value < 0;
    let mut magnitude = i64::from(value).unsigned_abs();
    let mut out = Vec::new();
    while magnitude > 0 {
        out.push(DIGITS[(magnitude % 36) as usize] as char);
        magnitude /= 36;
    }
    if negative {
        out.push('-');
    }
    out.iter().rev().collect()
}
