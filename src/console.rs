//! Line-based terminal I/O.

use crate::GameError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tracing::{instrument, trace};

/// Prompt-and-answer access to the player's terminal.
#[async_trait::async_trait]
pub trait Terminal: Send {
    /// Writes `prompt` without a newline and reads one line of input.
    ///
    /// The trailing line ending is stripped; nothing else is trimmed.
    /// Returns [`GameError::InputClosed`] at end of input.
    async fn read_line(&mut self, prompt: &str) -> Result<String, GameError>;

    /// Writes `line` followed by a newline.
    async fn write_line(&mut self, line: &str) -> Result<(), GameError>;
}

/// [`Terminal`] over any async reader/writer pair.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Console<R, W> {
    /// Creates a console from a buffered reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

#[async_trait::async_trait]
impl<R, W> Terminal for Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    #[instrument(skip(self))]
    async fn read_line(&mut self, prompt: &str) -> Result<String, GameError> {
        self.writer.write_all(prompt.as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(GameError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        trace!(line = %line, "Read line");
        Ok(line)
    }

    async fn write_line(&mut self, line: &str) -> Result<(), GameError> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[tokio::test]
    async fn test_read_line_strips_line_ending_only() {
        let mut console = console(" 5 \r\ny\n");
        assert_eq!(console.read_line("> ").await.unwrap(), " 5 ");
        assert_eq!(console.read_line("> ").await.unwrap(), "y");
        let (_, out) = console.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "> > ");
    }

    #[tokio::test]
    async fn test_empty_line_is_not_eof() {
        let mut console = console("\n");
        assert_eq!(console.read_line("").await.unwrap(), "");
        assert!(matches!(
            console.read_line("").await,
            Err(GameError::InputClosed)
        ));
    }

    #[tokio::test]
    async fn test_last_line_without_newline() {
        let mut console = console("n");
        assert_eq!(console.read_line("").await.unwrap(), "n");
    }

    #[tokio::test]
    async fn test_write_line_appends_newline() {
        let mut console = console("");
        console.write_line("hello").await.unwrap();
        let (_, out) = console.into_parts();
        assert_eq!(out, b"hello\n");
    }
}
