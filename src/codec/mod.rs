//! Quoted CSV row encoding and decoding.
mod row;

pub use row::{
    DecodeError,
    LINE_TERMINATOR,
    decode_row,
    encode_row,
    split_lines,
};
