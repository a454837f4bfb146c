//! Line-oriented terminal I/O.

use std::io;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

/// Prompt/answer channel between the user and the menu.
///
/// Generic over its streams so sessions can be scripted in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console bound to the process' stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub async fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        self.output.write_all(line.as_ref().as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }

    /// Show `prompt` and read the answer, trimmed.
    ///
    /// Bytes that are not UTF-8 are replaced with U+FFFD, so a garbled line
    /// reaches the caller as an answer it can reject. Returns `None` once
    /// input is exhausted.
    pub async fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line).await? == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ask_trims_and_detects_eof() {
        let mut console = Console::new("  0xabc \r\n".as_bytes(), Vec::new());

        assert_eq!(
            console.ask("Address: ").await.unwrap(),
            Some("0xabc".to_string())
        );
        assert_eq!(console.ask("Again: ").await.unwrap(), None);

        let (_, output) = console.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "Address: Again: ");
    }

    #[tokio::test]
    async fn test_blank_line_is_an_answer() {
        let mut console = Console::new("\n".as_bytes(), Vec::new());
        assert_eq!(console.ask("> ").await.unwrap(), Some(String::new()));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_an_answer() {
        let mut console = Console::new(&b"\xff\xfe\n0x1\n"[..], Vec::new());

        assert_eq!(
            console.ask("> ").await.unwrap(),
            Some("\u{fffd}\u{fffd}".to_string())
        );
        assert_eq!(console.ask("> ").await.unwrap(), Some("0x1".to_string()));
    }

    #[tokio::test]
    async fn test_say_appends_newline() {
        let mut console = Console::new(&b""[..], Vec::new());
        console.say("hello").await.unwrap();

        let (_, output) = console.into_parts();
        assert_eq!(output, b"hello\n");
    }
}
