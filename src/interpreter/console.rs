use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

/// The collaborator a program talks to for output and interactive input.
///
/// `print` and echoed expression results go through [`Console::write_line`];
/// the `input` native blocks in [`Console::read_line`].
pub trait Console {
    /// Writes one line of program output.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Shows `prompt` (possibly empty) and reads one line of input, without
    /// its line terminator.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        (**self).read_line(prompt)
    }
}

/// Console backed by the process's stdout and stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        if !prompt.is_empty() {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{prompt}")?;
            stdout.flush()?;
        }

        let mut buffer = String::new();
        io::stdin().lock().read_line(&mut buffer)?;
        while buffer.ends_with(['\n', '\r']) {
            buffer.pop();
        }
        Ok(buffer)
    }
}

/// In-memory console: records every output line and serves input from a
/// queue.
///
/// Reading past the end of the queued input yields an
/// [`io::ErrorKind::UnexpectedEof`] error.
///
/// # Example
/// ```
/// use erl::interpreter::console::{BufferConsole, Console};
///
/// let mut console = BufferConsole::with_input(["Ada"]);
/// let name = console.read_line("name? ").unwrap();
/// console.write_line(&format!("hello {name}")).unwrap();
///
/// assert_eq!(console.output(), ["hello Ada"]);
/// assert_eq!(console.prompts(), ["name? "]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    output:  Vec<String>,
    prompts: Vec<String>,
    input:   VecDeque<String>,
}

impl BufferConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console whose `read_line` calls return `lines` in order.
    pub fn with_input<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { input: lines.into_iter().map(Into::into).collect(),
               ..Self::default() }
    }

    /// Every line written so far.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Every prompt shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Console for BufferConsole {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.input
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more input"))
    }
}
