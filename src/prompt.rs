//! Interactive walkthrough: ask for a file, then whether and how to make the
//! formula indirect.

use formline_core::{FormlineError, Mode, Result, format_from_file, normalize_dropped_path};
use formline_engine::rewrite_references;
use std::io::{BufRead, Write};

const PATH_PROMPT: &str = "copy and paste file path, then press enter";
const INDIRECT_PROMPT: &str = "would you like to make the function \"indirect\"? [Y,N]";
const MODE_PROMPT: &str = "does this function need to work on every row or column? [row, col]";

/// How the walkthrough decides whether to rewrite references.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Indirect {
    /// Ask the user (the indirect question, then the mode question).
    #[default]
    Ask,
    /// Settled on the command line: only flatten.
    Never,
    /// Settled on the command line or in the config: rewrite with this mode.
    Always(Mode),
}

impl Indirect {
    pub fn from_choice(flat: bool, mode: Option<Mode>) -> Indirect {
        match (flat, mode) {
            (true, _) => Indirect::Never,
            (false, Some(mode)) => Indirect::Always(mode),
            (false, None) => Indirect::Ask,
        }
    }
}

pub struct Walkthrough<R, W> {
    input: R,
    output: W,
    default_mode: Option<Mode>,
    indirect: Indirect,
}

impl<R: BufRead, W: Write> Walkthrough<R, W> {
    pub fn new(input: R, output: W, default_mode: Option<Mode>) -> Self {
        Walkthrough {
            input,
            output,
            default_mode,
            indirect: Indirect::Ask,
        }
    }

    /// Skip the questions already answered by `indirect`.
    pub fn with_indirect(mut self, indirect: Indirect) -> Self {
        self.indirect = indirect;
        self
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(FormlineError::UnexpectedEof);
        }
        Ok(line)
    }

    fn ask_mode(&mut self) -> Result<Mode> {
        let prompt = match self.default_mode {
            Some(mode) => format!("{} (default: {})", MODE_PROMPT, mode),
            None => MODE_PROMPT.to_string(),
        };
        let answer = self.ask(&prompt)?;
        if let Some(mode) = self.default_mode
            && answer.trim().is_empty()
        {
            return Ok(mode);
        }
        Ok(answer.trim().parse::<Mode>()?)
    }

    /// Run the walkthrough and return the converted formula.
    ///
    /// The caller prints the result; only prompts are written to the output.
    pub fn run(&mut self) -> Result<String> {
        let answer = self.ask(PATH_PROMPT)?;
        let path = normalize_dropped_path(&answer).ok_or(FormlineError::EmptyPath)?;
        let formula = format_from_file(&path)?;

        let mode = match self.indirect {
            Indirect::Never => return Ok(formula),
            Indirect::Always(mode) => mode,
            Indirect::Ask => {
                let indirect = self.ask(INDIRECT_PROMPT)?;
                if !indirect.trim().eq_ignore_ascii_case("y") {
                    return Ok(formula);
                }
                self.ask_mode()?
            }
        };
        Ok(rewrite_references(&formula, mode))
    }
}
