// src/morse/mod.rs  —  Symbol table, Encoder, Decoder, Timing
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod table;
pub mod timing;

pub use decoder::{bits_to_morse, decode};
pub use encoder::{encode, morse_to_bits, morse_to_bits_with_unit};
pub use timing::find_unit_length;
