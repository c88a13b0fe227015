//! Transformaciones de cifrado simples (sin pretensión criptográfica).
use play_domain::config::{CipherConfig, CipherType};

/// Decodifica `encodedMessage` según el tipo de cifrado configurado.
pub fn decode_message(config: &CipherConfig) -> String {
    let msg = &config.encoded_message;
    match config.cipher_type {
        CipherType::Caesar => caesar_shift_back(msg, config.shift()),
        CipherType::Atbash => msg.chars().map(atbash).collect(),
        CipherType::Substitution => match &config.substitution_map {
            Some(map) => msg.chars()
                            .map(|c| substitute(c, |key| map.get(key).and_then(|v| v.chars().next())))
                            .collect(),
            None => msg.clone(),
        },
        CipherType::Custom => msg.clone(),
    }
}

fn caesar_shift_back(msg: &str, shift: u8) -> String {
    let shift = shift % 26;
    msg.chars()
       .map(|c| match c {
           'A'..='Z' => rotate(c, b'A', shift),
           'a'..='z' => rotate(c, b'a', shift),
           _ => c,
       })
       .collect()
}

fn rotate(c: char, base: u8, shift: u8) -> char {
    let offset = (c as u8 - base + 26 - shift) % 26;
    (base + offset) as char
}

fn atbash(c: char) -> char {
    match c {
        'A'..='Z' => (b'Z' - (c as u8 - b'A')) as char,
        'a'..='z' => (b'z' - (c as u8 - b'a')) as char,
        _ => c,
    }
}

/// Busca la clave tal cual, luego en mayúscula y en minúscula; conserva la
/// caja del carácter original.
fn substitute<F>(c: char, lookup: F) -> char
    where F: Fn(&str) -> Option<char>
{
    let mut buf = [0u8; 4];
    let key: &str = c.encode_utf8(&mut buf);
    if let Some(mapped) = lookup(key) {
        return mapped;
    }
    let upper: String = c.to_uppercase().collect();
    let lower: String = c.to_lowercase().collect();
    let mapped = lookup(&upper).or_else(|| lookup(&lower));
    match mapped {
        Some(m) if c.is_lowercase() => m.to_lowercase().next().unwrap_or(m),
        Some(m) if c.is_uppercase() => m.to_uppercase().next().unwrap_or(m),
        Some(m) => m,
        None => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use play_domain::config::CipherType;
    use std::collections::BTreeMap;

    fn cipher(cipher_type: CipherType, msg: &str) -> CipherConfig {
        CipherConfig { cipher_type,
                       encoded_message: msg.to_string(),
                       key_artifact_id: None,
                       caesar_shift: None,
                       substitution_map: None,
                       expected_plaintext: "x".to_string(),
                       normalize_mode: None,
                       show_decoder_ui: None }
    }

    #[test]
    fn caesar_defaults_to_shift_three() {
        assert_eq!(decode_message(&cipher(CipherType::Caesar, "KHOOR ZRUOG")), "HELLO WORLD");
        let mut c = cipher(CipherType::Caesar, "Bcd, a!");
        c.caesar_shift = Some(1);
        assert_eq!(decode_message(&c), "Abc, z!");
    }

    #[test]
    fn atbash_mirrors() {
        assert_eq!(decode_message(&cipher(CipherType::Atbash, "Zyx")), "Abc");
    }

    #[test]
    fn substitution_preserves_case() {
        let mut c = cipher(CipherType::Substitution, "Xy z");
        let mut map = BTreeMap::new();
        map.insert("X".to_string(), "A".to_string());
        map.insert("Y".to_string(), "B".to_string());
        c.substitution_map = Some(map);
        assert_eq!(decode_message(&c), "Ab z");
    }

    #[test]
    fn custom_is_identity() {
        assert_eq!(decode_message(&cipher(CipherType::Custom, "?!")), "?!");
    }
}
