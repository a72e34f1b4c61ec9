use super::{SeqError, SequenceLike};

/// Wraps an iterator with a single lookahead slot for LL(1)-ish usage
#[derive(Debug, Clone)]
pub struct PeekableSequence<I: Iterator> {
    iter: I,
    peeked: Option<I::Item>,
}

impl<I: Iterator> PeekableSequence<I> {
    pub fn new(iter: I) -> Self {
        Self { iter, peeked: None }
    }
}

impl<I: Iterator> SequenceLike for PeekableSequence<I> {
    type Item = I::Item;

    /// An `Iterator` can only report what's left by yielding it, so this fills
    /// the lookahead slot if it's empty
    fn has_next(&mut self) -> bool {
        self.peek().is_ok()
    }

    fn peek(&mut self) -> Result<&Self::Item, SeqError> {
        // The slot is only ever refilled after `next` has drained it
        if self.peeked.is_none() {
            self.peeked = self.iter.next();
        }
        self.peeked.as_ref().ok_or(SeqError::EndOfSequence)
    }

    fn next(&mut self) -> Result<Self::Item, SeqError> {
        match self.peeked.take() {
            Some(item) => Ok(item),
            None => self.iter.next().ok_or(SeqError::EndOfSequence),
        }
    }
}
