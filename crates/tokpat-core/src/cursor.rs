//! Character cursors handed to lexer rules.

/// Sequential character source a rule scans from.
///
/// Reading past the end returns `None` but still counts as a read: a rule
/// that peeks at end of input and then calls `unread` leaves the cursor
/// exactly where it was.
pub trait CharCursor {
    fn read(&mut self) -> Option<char>;

    /// Step back over the most recent read.
    fn unread(&mut self);

    /// Characters consumed so far (end-of-input reads excluded).
    fn offset(&self) -> usize;
}

/// Cursor over a single string.
#[derive(Debug, Clone)]
pub struct StringCursor<'s> {
    text: &'s str,
    /// Byte position of the next character.
    pos: usize,
    /// Characters consumed so far.
    chars: usize,
    /// Reads issued at end of input that have not been unread yet.
    eof_reads: usize,
}

impl<'s> StringCursor<'s> {
    pub fn new(text: &'s str) -> Self {
        Self {
            text,
            pos: 0,
            chars: 0,
            eof_reads: 0,
        }
    }

    /// Rewind to the start of the text.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.chars = 0;
        self.eof_reads = 0;
    }

    #[inline]
    pub fn text(&self) -> &'s str {
        self.text
    }

    /// Unconsumed rest of the text.
    #[inline]
    pub fn remaining(&self) -> &'s str {
        &self.text[self.pos..]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos == self.text.len()
    }
}

impl CharCursor for StringCursor<'_> {
    fn read(&mut self) -> Option<char> {
        match self.text[self.pos..].chars().next() {
            Some(c) => {
                self.pos += c.len_utf8();
                self.chars += 1;
                Some(c)
            }
            None => {
                self.eof_reads += 1;
                None
            }
        }
    }

    fn unread(&mut self) {
        if self.eof_reads > 0 {
            self.eof_reads -= 1;
            return;
        }
        if let Some(c) = self.text[..self.pos].chars().next_back() {
            self.pos -= c.len_utf8();
            self.chars -= 1;
        }
    }

    fn offset(&self) -> usize {
        self.chars
    }
}
