use super::{SeqError, SequenceLike};

/// Like [`PeekableSequence`](super::peek::PeekableSequence), but one element
/// that has already been consumed may be pushed back onto the front of the
/// sequence.
///
/// Reads are served from the pushed back element first, then from the
/// lookahead slot, and only then from the wrapped iterator.
#[derive(Debug, Clone)]
pub struct PushbackPeekableSequence<I: Iterator> {
    iter: I,
    peeked: Option<I::Item>,
    pushed: Option<I::Item>,
}

impl<I: Iterator> PushbackPeekableSequence<I> {
    pub fn new(iter: I) -> Self {
        Self { iter, peeked: None, pushed: None }
    }

    /// Put an element back in front of the sequence so the next `peek` or
    /// `next` returns it again.
    ///
    /// Only one element fits; if something has already been pushed back and
    /// not read yet, `item` is handed back as the error
    pub fn push_back(&mut self, item: I::Item) -> Result<(), I::Item> {
        if self.pushed.is_some() {
            return Err(item);
        }
        self.pushed = Some(item);
        Ok(())
    }

    /// Whether an element has been pushed back and not been consumed yet
    pub fn is_pushed_back(&self) -> bool {
        self.pushed.is_some()
    }
}

impl<I: Iterator> SequenceLike for PushbackPeekableSequence<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.peek().is_ok()
    }

    fn peek(&mut self) -> Result<&Self::Item, SeqError> {
        if self.pushed.is_none() && self.peeked.is_none() {
            self.peeked = self.iter.next();
        }
        self.pushed
            .as_ref()
            .or(self.peeked.as_ref())
            .ok_or(SeqError::EndOfSequence)
    }

    fn next(&mut self) -> Result<Self::Item, SeqError> {
        self.pushed
            .take()
            .or_else(|| self.peeked.take())
            .or_else(|| self.iter.next())
            .ok_or(SeqError::EndOfSequence)
    }
}
