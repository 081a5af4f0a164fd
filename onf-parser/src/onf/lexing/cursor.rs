//! Line cursor
//!
//!     The continuation rules of ONF all need one line of lookahead: a line belongs to the
//!     current unit unless it is the start of a new one, and that can only be known by looking
//!     at it before consuming it. `LineCursor` is the single place where that peeking happens.
//!     Leaf blocks, attribute blocks, prop arguments and chain mentions all walk their lines
//!     through it, each passing its own continuation predicate.

/// A forward-only cursor over a slice of lines.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, position: 0 }
    }

    /// The next line, without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    /// Consume and return the next line.
    pub fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.position += 1;
        Some(line)
    }

    pub fn is_done(&self) -> bool {
        self.position >= self.lines.len()
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> &'a [&'a str] {
        &self.lines[self.position.min(self.lines.len())..]
    }

    /// Consume lines while `is_boundary` rejects them, returning them trimmed.
    ///
    /// This is the continuation collector: the line that makes `is_boundary` true is left in
    /// place for the caller.
    pub fn collect_until<P>(&mut self, is_boundary: P) -> Vec<&'a str>
    where
        P: Fn(&str) -> bool,
    {
        let mut collected = Vec::new();
        while let Some(line) = self.peek() {
            if is_boundary(line) {
                break;
            }
            collected.push(line.trim());
            self.position += 1;
        }
        collected
    }

    /// Consume lines while `is_continuation` accepts them, returning them trimmed.
    pub fn collect_while<P>(&mut self, is_continuation: P) -> Vec<&'a str>
    where
        P: Fn(&str) -> bool,
    {
        self.collect_until(|line| !is_continuation(line))
    }
}
