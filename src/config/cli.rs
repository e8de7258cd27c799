use crate::config::OutputFormat;
use crate::core::{CheckReport, InputSource, InputSpec, Reporter};
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::validate_array_size;
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

const READ_CHUNK: usize = 4096;

/// Whitespace-tokenized integer reader. Tokens may be spread over any number of lines.
#[derive(Debug)]
pub struct StdinSource<R> {
    reader: R,
    pending: VecDeque<String>,
    position: usize,
    max_size: usize,
}

impl StdinSource<BufReader<tokio::io::Stdin>> {
    pub fn stdin(max_size: usize) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), max_size)
    }
}

impl<R: AsyncBufRead + Unpin + Send> StdinSource<R> {
    pub fn new(reader: R, max_size: usize) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            position: 0,
            max_size,
        }
    }

    async fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                self.position += 1;
                return Ok(Some(token));
            }

            // undecodable bytes become an unparsable token
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line).await? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(|b| b.is_ascii_whitespace())
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
    }

    async fn next_int(&mut self) -> Result<Option<i64>> {
        match self.next_token().await? {
            Some(token) => token
                .parse::<i64>()
                .map(Some)
                .map_err(|_| CheckError::InvalidToken {
                    position: self.position,
                    token,
                }),
            None => Ok(None),
        }
    }
}

impl<R: AsyncBufRead + Unpin + Send> InputSource for StdinSource<R> {
    async fn read_size(&mut self) -> Result<usize> {
        let declared = self.next_int().await?.ok_or(CheckError::MissingSize)?;
        validate_array_size(declared, self.max_size)
    }

    async fn read_values(&mut self, size: usize) -> Result<InputSpec> {
        // bounded reserve; grows with the input
        let mut values = Vec::with_capacity(size.min(READ_CHUNK));
        while values.len() < size {
            match self.next_int().await? {
                Some(value) => values.push(value),
                None => {
                    return Err(CheckError::UnexpectedEof {
                        expected: size,
                        read: values.len(),
                    })
                }
            }
        }

        if !self.pending.is_empty() {
            tracing::debug!("Ignoring remaining tokens");
        }
        Ok(InputSpec::new(values))
    }
}

/// Writes the verdict line to `out` and, unless quiet, prompts to `prompts`.
#[derive(Debug)]
pub struct ConsoleReporter<W, P> {
    out: W,
    prompts: Option<P>,
    format: OutputFormat,
}

impl ConsoleReporter<tokio::io::Stdout, tokio::io::Stderr> {
    pub fn console(format: OutputFormat, quiet: bool) -> Self {
        let prompts = (!quiet).then(tokio::io::stderr);
        Self::new(tokio::io::stdout(), prompts, format)
    }
}

impl<W, P> ConsoleReporter<W, P>
where
    W: AsyncWrite + Unpin + Send,
    P: AsyncWrite + Unpin + Send,
{
    pub fn new(out: W, prompts: Option<P>, format: OutputFormat) -> Self {
        Self {
            out,
            prompts,
            format,
        }
    }

    pub fn into_inner(self) -> (W, Option<P>) {
        (self.out, self.prompts)
    }

    fn render(&self, report: &CheckReport) -> Result<String> {
        let line = match self.format {
            OutputFormat::Text => report.verdict().message().to_string(),
            OutputFormat::Json => serde_json::to_string(report)?,
        };
        Ok(line)
    }
}

#[async_trait]
impl<W, P> Reporter for ConsoleReporter<W, P>
where
    W: AsyncWrite + Unpin + Send,
    P: AsyncWrite + Unpin + Send,
{
    async fn prompt(&mut self, text: &str) -> Result<()> {
        if let Some(prompts) = self.prompts.as_mut() {
            prompts.write_all(text.as_bytes()).await?;
            prompts.write_all(b"\n").await?;
            prompts.flush().await?;
        }
        Ok(())
    }

    async fn report(&mut self, report: &CheckReport) -> Result<()> {
        let mut line = self.render(report)?;
        line.push('\n');
        self.out.write_all(line.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tokens_span_lines() {
        let input: &[u8] = b"3\n1\n  2   3\n";
        let mut source = StdinSource::new(input, 100);
        let input = source.read_input().await.unwrap();
        assert_eq!(input.values, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_several_values_on_size_line() {
        let input: &[u8] = b"2 -4 9";
        let mut source = StdinSource::new(input, 100);
        assert_eq!(source.read_size().await.unwrap(), 2);
        let input = source.read_values(2).await.unwrap();
        assert_eq!(input.values, vec![-4, 9]);
    }

    #[tokio::test]
    async fn test_trailing_tokens_are_ignored() {
        let input: &[u8] = b"1 5 6 garbage\n";
        let mut source = StdinSource::new(input, 100);
        let input = source.read_input().await.unwrap();
        assert_eq!(input.values, vec![5]);
    }

    #[tokio::test]
    async fn test_invalid_token_position() {
        let input: &[u8] = b"3\n1 x 3\n";
        let mut source = StdinSource::new(input, 100);
        match source.read_input().await {
            Err(CheckError::InvalidToken { position, token }) => {
                assert_eq!(position, 3);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_out_of_range_token_is_invalid() {
        let input: &[u8] = b"1 99999999999999999999";
        let mut source = StdinSource::new(input, 100);
        assert!(matches!(
            source.read_input().await,
            Err(CheckError::InvalidToken { position: 2, .. })
        ));
    }

    #[tokio::test]
    async fn test_non_utf8_token_is_invalid() {
        let input: &[u8] = b"2\n1 \xff\n";
        let mut source = StdinSource::new(input, 100);
        let err = source.read_input().await.unwrap_err();
        assert!(matches!(err, CheckError::InvalidToken { position: 3, .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_huge_declared_size_on_short_input() {
        let input: &[u8] = b"9223372036854775807\n1\n";
        let mut source = StdinSource::new(input, usize::MAX);
        let err = source.read_input().await.unwrap_err();
        assert!(matches!(err, CheckError::UnexpectedEof { read: 1, .. }));
    }

    #[tokio::test]
    async fn test_empty_input_has_no_size() {
        let input: &[u8] = b"   \n";
        let mut source = StdinSource::new(input, 100);
        assert!(matches!(
            source.read_size().await,
            Err(CheckError::MissingSize)
        ));
    }

    #[tokio::test]
    async fn test_quiet_reporter_writes_only_verdict() {
        let mut reporter: ConsoleReporter<Vec<u8>, Vec<u8>> =
            ConsoleReporter::new(Vec::new(), None, OutputFormat::Text);
        reporter.prompt("Enter the size of the array").await.unwrap();
        reporter.report(&CheckReport::new(2, None)).await.unwrap();

        let (out, prompts) = reporter.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "The array is sorted\n");
        assert!(prompts.is_none());
    }

    #[tokio::test]
    async fn test_json_report_line() {
        let mut reporter = ConsoleReporter::new(Vec::<u8>::new(), Some(Vec::<u8>::new()), OutputFormat::Json);
        reporter.report(&CheckReport::new(4, Some(1))).await.unwrap();

        let (out, _) = reporter.into_inner();
        let line = String::from_utf8(out).unwrap();
        assert!(line.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["size"], 4);
        assert_eq!(value["sorted"], false);
        assert_eq!(value["first_inversion"], 1);
        assert_eq!(value["message"], "Array is unsorted");
    }
}
