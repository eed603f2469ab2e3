//! Mermaid-safe identifier generation.

use rand::Rng;

const SUFFIX_LEN: usize = 4;
const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Stands in for the base when nothing alphabetic survives stripping, so the
/// result still starts with a letter.
const FALLBACK_BASE: &str = "Block";

/// Builds an identifier that is safe to embed in Mermaid markup.
///
/// Block names are free text and may contain spaces, punctuation, or
/// non-Latin scripts, none of which are valid in a Mermaid node id. Every
/// character outside `A-Za-z` is stripped from the base, and a short random
/// hex suffix keeps ids distinct across blocks generated from the same kind
/// name.
///
/// The result always matches `[A-Za-z][A-Za-z0-9]*`. A 4-character suffix
/// makes collisions improbable at editor scale (tens of blocks per session);
/// the graph store re-rolls on the rare hit. This is not a security
/// boundary, so a non-cryptographic thread-local source is sufficient.
pub fn safe_id(base: &str) -> String {
    let mut id: String = base.chars().filter(char::is_ascii_alphabetic).collect();
    if id.is_empty() {
        id.push_str(FALLBACK_BASE);
    }

    let mut rng = rand::rng();
    for _ in 0..SUFFIX_LEN {
        let index = rng.random_range(0..HEX_ALPHABET.len());
        id.push(HEX_ALPHABET[index] as char);
    }
    id
}
