use std::{
    fs::File,
    io::{self, BufRead, BufReader, StdinLock, Write},
    path::{Path, PathBuf},
};

/// Supplies the complete text of a program.
pub trait SourceReader {
    /// Reads the whole program into memory.
    ///
    /// # Errors
    /// Propagates failures of the underlying stream.
    fn read_full_source(&mut self) -> io::Result<String>;
}

/// Receives output one line at a time.
pub trait LineSink {
    /// Emits `line` followed by a line terminator.
    ///
    /// # Errors
    /// Propagates failures of the underlying stream.
    fn print_line(&mut self, line: &str) -> io::Result<()>;
}

/// Collects a program from line-oriented input.
///
/// Lines are read until the end of the stream or the first blank line. Each
/// collected line is followed by a single space, so `a = 1;\nb = 2;\n`
/// becomes `"a = 1; b = 2; "`. Both `\n` and `\r\n` end a line.
///
/// Bytes that are not valid UTF-8 become U+FFFD, which the lexer rejects as
/// an invalid character.
///
/// # Example
/// ```
/// use assignlang::io::join_lines;
///
/// let text = join_lines("x = 1;\ny = 2;\n\nignored = 3;\n".as_bytes()).unwrap();
/// assert_eq!(text, "x = 1; y = 2; ");
///
/// let text = join_lines(&b"x = \xff;\r\n"[..]).unwrap();
/// assert_eq!(text, "x = \u{FFFD}; ");
/// ```
pub fn join_lines<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut source = String::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.is_empty() {
            break;
        }
        source.push_str(&String::from_utf8_lossy(line));
        source.push(' ');
    }
    Ok(source)
}

/// Reads a program from any buffered reader, such as standard input.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderSource<StdinLock<'static>> {
    /// A source reading from the process's standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> SourceReader for ReaderSource<R> {
    fn read_full_source(&mut self) -> io::Result<String> {
        join_lines(&mut self.reader)
    }
}

/// Reads a program from a file, applying the same line rules as standard
/// input.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl SourceReader for FileSource {
    fn read_full_source(&mut self) -> io::Result<String> {
        join_lines(BufReader::new(File::open(&self.path)?))
    }
}

/// Writes output lines to standard output.
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }
}

impl LineSink for Vec<String> {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}
