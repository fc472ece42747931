use crate::engine::Token;
use std::io::{self, BufRead};

/// Whitespace predicate used to split tokens.
///
/// Matches the classic C-locale `isspace` set only. Unicode spaces such as
/// U+00A0 are treated as ordinary token characters.
pub fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Byte length of the UTF-8 sequence introduced by `lead`, or 0 if `lead`
/// cannot start one.
fn sequence_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn decode(bytes: &[u8]) -> Option<char> {
    std::str::from_utf8(bytes).ok()?.chars().next()
}

/// What scanning one buffered chunk produced.
enum Step {
    Token(Token),
    Invalid,
    NeedMore,
}

/// Scan cursor and accumulator, kept apart from the reader so a borrowed
/// buffer can be fed in while they are updated.
#[derive(Default)]
struct ScanState {
    /// Byte offset of the next undecoded character.
    cursor: usize,
    current: String,
    start: usize,
    /// Leading bytes of a character split across two buffer fills.
    partial: [u8; 4],
    partial_len: usize,
}

impl ScanState {
    fn accept(&mut self, c: char, width: usize) -> Option<Token> {
        let at = self.cursor;
        self.cursor += width;

        if is_delimiter(c) {
            if self.current.is_empty() {
                return None;
            }
            return Some(Token::new(std::mem::take(&mut self.current), self.start));
        }

        if self.current.is_empty() {
            self.start = at;
        }
        self.current.push(c);
        None
    }

    /// Scans `buf` until a token completes, a bad byte is reached, or the
    /// chunk runs out. Returns how many bytes of `buf` were used.
    fn feed(&mut self, buf: &[u8]) -> (usize, Step) {
        let mut used = 0;

        if self.partial_len > 0 {
            let width = sequence_width(self.partial[0]);
            let take = (width - self.partial_len).min(buf.len());
            self.partial[self.partial_len..self.partial_len + take].copy_from_slice(&buf[..take]);
            self.partial_len += take;
            used = take;

            if self.partial_len < width {
                return (used, Step::NeedMore);
            }
            self.partial_len = 0;
            let Some(c) = decode(&self.partial[..width]) else {
                return (used, Step::Invalid);
            };
            if let Some(token) = self.accept(c, width) {
                return (used, Step::Token(token));
            }
        }

        while used < buf.len() {
            let width = sequence_width(buf[used]);
            if width == 0 {
                return (used, Step::Invalid);
            }
            if used + width > buf.len() {
                let rest = &buf[used..];
                self.partial[..rest.len()].copy_from_slice(rest);
                self.partial_len = rest.len();
                return (buf.len(), Step::NeedMore);
            }

            let Some(c) = decode(&buf[used..used + width]) else {
                return (used, Step::Invalid);
            };
            used += width;
            if let Some(token) = self.accept(c, width) {
                return (used, Step::Token(token));
            }
        }

        (used, Step::NeedMore)
    }

    fn invalid_data(&self) -> io::Error {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid UTF-8 at byte {}", self.cursor),
        )
    }
}

/// Lazy, single-pass tokenizer over a buffered reader.
///
/// Purpose: Splits a character stream into maximal runs of non-whitespace.
/// Big Picture: Driven by `App::run`, which forwards every token to a sink as
/// soon as it is produced.
/// Connections: Reads through any `BufRead`; `input::open` supplies the file
/// reader in the binary, tests use byte slices.
///
/// Characters are decoded straight out of the reader's buffer, so only the
/// token being accumulated is held in memory. Invalid UTF-8 is reported when
/// the scan reaches it; tokens completed before that point are yielded first.
/// Once the input is exhausted or a read fails the iterator yields nothing.
pub struct Tokenizer<R> {
    reader: R,
    state: ScanState,
    done: bool,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            state: ScanState::default(),
            done: false,
        }
    }

    /// Bytes of input scanned so far.
    pub fn offset(&self) -> usize {
        self.state.cursor
    }

    fn fail(&mut self, err: io::Error) -> Option<io::Result<Token>> {
        self.done = true;
        self.state.current.clear();
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return self.fail(err),
            };

            if buf.is_empty() {
                if self.state.partial_len > 0 {
                    let err = self.state.invalid_data();
                    return self.fail(err);
                }
                // End of input is not a delimiter, but whatever is pending is still a token.
                self.done = true;
                if self.state.current.is_empty() {
                    return None;
                }
                let text = std::mem::take(&mut self.state.current);
                return Some(Ok(Token::new(text, self.state.start)));
            }

            let (used, step) = self.state.feed(buf);
            self.reader.consume(used);

            match step {
                Step::Token(token) => return Some(Ok(token)),
                Step::NeedMore => {}
                Step::Invalid => {
                    let err = self.state.invalid_data();
                    return self.fail(err);
                }
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Tokenizer<R> {}

/// Tokenizes in-memory text.
pub fn tokenize(text: &str) -> Vec<Token> {
    // Reading from a `&[u8]` of valid UTF-8 cannot fail.
    Tokenizer::new(text.as_bytes()).map_while(Result::ok).collect()
}
