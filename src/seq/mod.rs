//! Single-slot lookahead over any forward-only sequence

pub mod peek;
pub mod pushback;

use std::error::Error;

use peek::PeekableSequence;
use pushback::PushbackPeekableSequence;

/// Why a read from a sequence failed. Neither of these is fatal; an LL(1)
/// consumer is expected to check `has_next` or handle the error directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIs)]
pub enum SeqError {
    /// Nothing left in any slot or in the backing sequence
    #[strum(to_string = "end of sequence")]
    EndOfSequence,
    /// The sequence does not support this operation at all
    #[strum(to_string = "unsupported operation")]
    UnsupportedOperation,
}

impl Error for SeqError {}

/// A sequence that can be inspected one element ahead before consuming it.
///
/// Implementors own their backing sequence exclusively; pulling from the
/// backing sequence behind the wrapper's back breaks the lookahead.
pub trait SequenceLike {
    type Item;

    /// Check whether `peek` and `next` would succeed
    fn has_next(&mut self) -> bool;

    /// Get the upcoming element without consuming it. Peeking several times in
    /// succession returns the same element
    fn peek(&mut self) -> Result<&Self::Item, SeqError>;

    /// Consume the upcoming element
    fn next(&mut self) -> Result<Self::Item, SeqError>;

    /// Removal from the backing sequence is never supported
    fn remove(&mut self) -> Result<(), SeqError> {
        Err(SeqError::UnsupportedOperation)
    }

    /// Consume the upcoming element only if it matches the predicate
    fn next_if<P>(&mut self, predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnOnce(&Self::Item) -> bool,
    {
        if self.peek().is_ok_and(predicate) {
            self.next().ok()
        }
        else {
            None
        }
    }

    /// Consume the upcoming element only if it equals `expected`
    fn next_if_eq(&mut self, expected: &Self::Item) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        self.next_if(|item| item == expected)
    }

    /// Borrow this sequence as a plain `Iterator`
    fn iter(&mut self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter(self)
    }
}

/// Drains a `SequenceLike` through the standard `Iterator` interface, see
/// [`SequenceLike::iter`]
#[derive(Debug)]
pub struct Iter<'a, S: SequenceLike>(&'a mut S);

impl<S: SequenceLike> Iterator for Iter<'_, S> {
    type Item = S::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().ok()
    }
}

/// Wrap any iterator into one of the lookahead sequences
pub trait SequenceExt: Iterator + Sized {
    /// Wrap this iterator with a single lookahead slot
    fn peekable_seq(self) -> PeekableSequence<Self> {
        PeekableSequence::new(self)
    }
    /// Wrap this iterator with a lookahead slot and a pushback slot
    fn pushback_seq(self) -> PushbackPeekableSequence<Self> {
        PushbackPeekableSequence::new(self)
    }
}

impl<I: Iterator> SequenceExt for I {}
