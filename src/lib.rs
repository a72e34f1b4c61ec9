//! Single-slot lookahead and pushback sequences for LL(1) parsers

pub mod seq;

pub use seq::{peek::PeekableSequence, pushback::PushbackPeekableSequence, SeqError, SequenceExt, SequenceLike};
