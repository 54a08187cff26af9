/// Low-level byte reader over source text.
///
/// Holds the byte under the cursor in `ch`, its offset in `curr`, and the
/// offset of the next byte to read in `read`. Past the end of the input `ch`
/// is `0`, `curr` equals the input length and further bumps are no-ops.
pub struct Cursor<'src> {
    source: &'src str,
    /// Offset of the byte under the cursor.
    curr: usize,
    /// Offset of the *next* byte to be read.
    read: usize,
    /// Byte under the cursor, or `0` at end of input.
    ch: u8,
}

impl<'src> Cursor<'src> {
    /// Create a cursor positioned on the first byte of `source`.
    pub fn new(source: &'src str) -> Self {
        let mut cursor = Self {
            source,
            curr: 0,
            read: 0,
            ch: 0,
        };
        cursor.bump();
        cursor
    }

    /// Byte under the cursor (`0` at end of input).
    pub fn current(&self) -> u8 {
        self.ch
    }

    /// Byte offset of the byte under the cursor.
    pub fn offset(&self) -> usize {
        self.curr
    }

    /// True once every byte of the input has been consumed.
    ///
    /// An embedded NUL byte is not end of input; only the position decides.
    pub fn is_eof(&self) -> bool {
        self.curr >= self.source.len()
    }

    /// Advance one byte.
    pub fn bump(&mut self) {
        let len = self.source.len();
        if self.read >= len {
            self.ch = 0;
            self.curr = len;
            self.read = len;
            return;
        }
        self.ch = self.source.as_bytes()[self.read];
        self.curr = self.read;
        self.read += 1;
    }

    /// Consume bytes while `predicate` holds for the byte under the cursor.
    pub fn eat_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while !self.is_eof() && predicate(self.ch) {
            self.bump();
        }
    }

    /// Slice the source from byte offset `start` to the cursor.
    ///
    /// Callers only stop on ASCII bytes, so the slice always falls on
    /// character boundaries.
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.curr]
    }
}
