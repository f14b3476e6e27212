//! Terminal helpers: screen clearing and line-oriented prompts.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};

/// Clear the screen and home the cursor.
pub fn clear<W: Write>(out: &mut W) -> Result<()> {
    crossterm::execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

/// Prompt and read one line. End-of-input is a hard error here.
pub fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(trim_newline(line))
}

/// Prompt and read one line, retrying forever on end-of-input.
pub fn read_line_retry<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            continue;
        }
        return Ok(trim_newline(line));
    }
}

fn trim_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    /// Reader that reports end-of-input once before yielding its data,
    /// like a terminal where the solver typed Ctrl+D.
    struct EofOnce {
        served_eof: bool,
        data: Cursor<Vec<u8>>,
    }

    impl EofOnce {
        fn new(data: &[u8]) -> Self {
            Self {
                served_eof: false,
                data: Cursor::new(data.to_vec()),
            }
        }
    }

    impl Read for EofOnce {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.served_eof {
                self.served_eof = true;
                return Ok(0);
            }
            self.data.read(buf)
        }
    }

    impl BufRead for EofOnce {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if !self.served_eof {
                self.served_eof = true;
                return Ok(&[]);
            }
            self.data.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.data.consume(amt)
        }
    }

    #[test]
    fn test_read_line_strips_newline() {
        let mut input = Cursor::new(b"hello\r\n".to_vec());
        let mut out = Vec::new();

        let line = read_line(&mut input, &mut out, "> ").unwrap();
        assert_eq!(line, "hello");
        assert_eq!(out, b"> ");
    }

    #[test]
    fn test_read_line_fails_on_eof() {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();

        assert!(read_line(&mut input, &mut out, "> ").is_err());
    }

    #[test]
    fn test_read_line_retry_recovers_from_eof() {
        let mut input = EofOnce::new(b"ready\n");
        let mut out = Vec::new();

        let line = read_line_retry(&mut input, &mut out, "> ").unwrap();

        assert_eq!(line, "ready");
        // Prompted once before the end-of-input and once after.
        assert_eq!(out, b"> > ");
    }
}
