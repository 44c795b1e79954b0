use std::iter;

use crate::error::ErlError;

/// Header line printed before every reported error.
pub const ERROR_HEADER: &str = " ! ERROR";

impl ErlError {
    /// Renders the two-line caret diagnostic for this error.
    ///
    /// The first line is `source_line` verbatim, the second places a `^`
    /// under the error's column. Tabs before the column are repeated in the
    /// padding so the caret lines up however the terminal expands them.
    ///
    /// ## Example
    /// ```
    /// use erl::{ast::Position, error::ErlError};
    ///
    /// let error = ErlError::lexical("Unexpected character '$'", Position::new(0, 4));
    /// assert_eq!(error.render("x = $"), "x = $\n    ^");
    ///
    /// let error = ErlError::lexical("Unexpected character '$'", Position::new(0, 2));
    /// assert_eq!(error.render("\t\t$"), "\t\t$\n\t\t^");
    /// ```
    #[must_use]
    pub fn render(&self, source_line: &str) -> String {
        let pad: String = source_line.chars()
                                     .map(|c| if c == '\t' { '\t' } else { ' ' })
                                     .chain(iter::repeat(' '))
                                     .take(self.position().column)
                                     .collect();
        format!("{source_line}\n{pad}^")
    }

    /// Produces the full report shown to the user.
    ///
    /// The report is the error header, the one-line message and, when the
    /// error's line exists in `lines`, the caret rendering.
    #[must_use]
    pub fn report<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let mut report = format!("{ERROR_HEADER}\n{self}");
        if let Some(line) = lines.get(self.position().line) {
            report.push('\n');
            report.push_str(&self.render(line.as_ref()));
        }
        report
    }
}
