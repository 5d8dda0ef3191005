//! Notes system — plain-text notes stored one file per note
//!
//! A note's name is its filename inside the notes directory and its text is the
//! file's full contents. Names are confined to the notes directory by the
//! resolver before any filesystem call is made.

pub mod error;
pub mod resolver;
pub mod store;

pub use error::NoteError;
pub use store::{Note, NoteStore};
