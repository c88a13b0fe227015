//! Modos de normalización de respuestas.
//!
//! - `strict`: sólo se recortan los espacios de los extremos.
//! - `fuzzy`: sin mayúsculas, sin diacríticos, sin puntuación y con espacios
//!   colapsados.
//! - `numeric`: sólo dígitos, comparados como enteros (sin ceros a la
//!   izquierda).
use play_domain::config::NormalizeMode;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub fn normalize(input: &str, mode: NormalizeMode) -> String {
    match mode {
        NormalizeMode::Strict => input.trim().to_string(),
        NormalizeMode::Fuzzy => fuzzy(input),
        NormalizeMode::Numeric => numeric(input),
    }
}

fn fuzzy(input: &str) -> String {
    let folded: String = input.nfkd()
                              .filter(|c| !is_combining_mark(*c))
                              .flat_map(char::to_lowercase)
                              .map(|c| if c.is_whitespace() { ' ' } else { c })
                              .filter(|c| c.is_alphanumeric() || *c == ' ')
                              .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn numeric(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return digits;
    }
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Un candidato vacío tras normalizar nunca coincide.
pub fn matches(candidate: &str, expected: &str, mode: NormalizeMode) -> bool {
    let c = normalize(candidate, mode);
    !c.is_empty() && c == normalize(expected, mode)
}

/// Primera respuesta aceptada que coincide con el candidato.
pub fn find_match<'a>(candidate: &str, accepted: &'a [String], mode: NormalizeMode) -> Option<&'a String> {
    accepted.iter().find(|a| matches(candidate, a, mode))
}
