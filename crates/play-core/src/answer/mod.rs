//! Normalización de respuestas y decodificación de cifrados.

pub mod cipher;
pub mod normalize;

pub use cipher::decode_message;
pub use normalize::{find_match, matches, normalize};
