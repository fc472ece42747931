// Token sinks: where each token goes the moment the tokenizer produces it.

use crate::engine::Token;
use std::io::{self, Write};

pub trait TokenSink {
    fn emit(&mut self, token: &Token) -> io::Result<()>;
}

/// Writes `Token: <text>` lines, flushing after each one.
pub struct ConsoleReporter<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TokenSink for ConsoleReporter<W> {
    fn emit(&mut self, token: &Token) -> io::Result<()> {
        writeln!(self.writer, "Token: {}", token)?;
        self.writer.flush()
    }
}

impl TokenSink for Vec<Token> {
    fn emit(&mut self, token: &Token) -> io::Result<()> {
        self.push(token.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_reporter_format() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.emit(&Token::new("alpha", 0)).unwrap();
        reporter.emit(&Token::new("beta", 6)).unwrap();

        let written = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(written, "Token: alpha\nToken: beta\n");
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<Token> = Vec::new();
        sink.emit(&Token::new("one", 0)).unwrap();
        sink.emit(&Token::new("two", 4)).unwrap();
        assert_eq!(sink, vec![Token::new("one", 0), Token::new("two", 4)]);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_console_reporter_propagates_write_errors() {
        let mut reporter = ConsoleReporter::new(FailingWriter);
        let err = reporter.emit(&Token::new("x", 0)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
