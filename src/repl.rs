use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::debug;

use crate::{
    error::ErlError,
    interpreter::{
        console::{Console, StdConsole},
        evaluator::core::Context,
        parser::core::Parser,
    },
};

/// Shown when the shell waits for a new entry.
pub const PROMPT: &str = " ERL ==> ";
/// Shown while an open block waits for its terminator.
pub const CONTINUATION_PROMPT: &str = "   ... ";
/// Typing this on its own ends the session.
pub const QUIT_SENTINEL: &str = "QUIT()";

/// What happened to a line fed to a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    /// The quit sentinel was entered.
    Quit,
    /// The entry opened a block that is not closed yet; more lines are
    /// needed.
    Continue,
    /// The entry ran to completion.
    Ran,
    /// The entry failed; carries the full diagnostic.
    Failed(String),
}

/// The state of one interactive session.
///
/// A single [`Context`] lives for the whole session, so bindings made by one
/// entry are visible to the next. Expression statements echo their value.
/// An entry that opens a block is buffered line by line until the block's
/// terminator arrives, and only then runs.
///
/// # Example
/// ```
/// use erl::{
///     interpreter::console::BufferConsole,
///     repl::{Feed, Session},
/// };
///
/// let mut session = Session::new(BufferConsole::new());
///
/// assert_eq!(session.feed("x = 20"), Feed::Ran);
/// assert_eq!(session.feed("while x < 22"), Feed::Continue);
/// assert_eq!(session.feed("  x = x + 1"), Feed::Continue);
/// assert_eq!(session.feed("endwhile"), Feed::Ran);
/// assert_eq!(session.feed("x * 2"), Feed::Ran);
/// assert_eq!(session.feed("QUIT()"), Feed::Quit);
///
/// assert_eq!(session.context().console().output(), ["44"]);
/// ```
#[derive(Debug)]
pub struct Session<C: Console> {
    context: Context<C>,
    pending: Vec<String>,
}

impl<C: Console> Session<C> {
    pub fn new(console: C) -> Self {
        Self { context: Context::with_console(console).with_echo(true),
               pending: Vec::new() }
    }

    /// The prompt for the next line.
    pub fn prompt(&self) -> &'static str {
        if self.pending.is_empty() { PROMPT } else { CONTINUATION_PROMPT }
    }

    pub const fn context(&self) -> &Context<C> {
        &self.context
    }

    /// Drops a partially entered block.
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }

    /// Feeds one line of input.
    ///
    /// The buffered entry is re-parsed as a whole each time. When it parses
    /// completely its statements run in order; a block still waiting for its
    /// terminator asks for more input; any other error ends the entry.
    pub fn feed(&mut self, line: &str) -> Feed {
        if self.pending.is_empty() && line.trim() == QUIT_SENTINEL {
            return Feed::Quit;
        }
        self.pending.push(line.to_string());

        let parsed = Parser::from_source(&self.pending).and_then(|mut parser| parser.parse_all());
        let nodes = match parsed {
            Ok(nodes) => nodes,
            Err(error) if error.is_at_end_of_input() => {
                debug!(lines = self.pending.len(), "entry continues");
                return Feed::Continue;
            },
            Err(error) => return self.fail(&error),
        };

        for node in &nodes {
            if let Err(error) = self.context.execute_top_level(node) {
                return self.fail(&error);
            }
        }
        self.pending.clear();
        Feed::Ran
    }

    fn fail(&mut self, error: &ErlError) -> Feed {
        let report = error.report(&self.pending);
        self.pending.clear();
        Feed::Failed(report)
    }
}

/// Runs the interactive shell on the terminal until `QUIT()` or end of
/// input.
///
/// Ctrl-C abandons a partially entered block.
///
/// # Errors
/// Returns terminal errors other than interruption and end of input.
pub fn run() -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut session = Session::new(StdConsole);

    loop {
        match editor.readline(session.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                match session.feed(&line) {
                    Feed::Quit => break,
                    Feed::Failed(report) => eprintln!("{report}"),
                    Feed::Continue | Feed::Ran => {},
                }
            },
            Err(ReadlineError::Interrupted) => session.discard_pending(),
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}
