use crate::console::listing::render_bets;
use crate::console::messages::{
    APP_TITLE, DEFAULT_INPUT_ERROR, DEFAULT_PROMPT, ERROR_HEADER, INFO_HEADER, SEPARATOR,
};
use crate::error::{BetError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Line-oriented console over an injected reader/writer pair
///
/// Every `ask_*` method keeps prompting until it gets acceptable input and
/// returns [`BetError::EndOfInput`] once the reader is exhausted.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print the prompt and return the next line without its terminator
    pub fn ask_string(&mut self, prompt: &str) -> Result<String> {
        self.write_line(or_default(prompt, DEFAULT_PROMPT))?;
        self.read_line()
    }

    pub fn ask_non_empty_string(&mut self, prompt: &str, error_message: &str) -> Result<String> {
        let error_message = or_default(error_message, DEFAULT_INPUT_ERROR);
        self.write_line(or_default(prompt, DEFAULT_PROMPT))?;
        loop {
            let line = self.read_line()?;
            if !line.is_empty() {
                return Ok(line);
            }
            self.write_line(error_message)?;
        }
    }

    pub fn ask_integer(&mut self, prompt: &str, error_message: &str) -> Result<i32> {
        self.ask_parsed(prompt, error_message, |_: &i32| true)
    }

    /// Like [`Console::ask_integer`] but for reals; `NaN` and infinities are refused
    pub fn ask_float(&mut self, prompt: &str, error_message: &str) -> Result<f64> {
        self.ask_parsed(prompt, error_message, |value: &f64| value.is_finite())
    }

    /// Prompt until a line parses as `T` and passes `accept`
    ///
    /// Surrounding whitespace is ignored, so `" 5 "` reads as `5`.
    fn ask_parsed<T, F>(&mut self, prompt: &str, error_message: &str, accept: F) -> Result<T>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        let error_message = or_default(error_message, DEFAULT_INPUT_ERROR);
        self.write_line(or_default(prompt, DEFAULT_PROMPT))?;
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => self.write_line(error_message)?,
            }
        }
    }

    /// Print a header framed by separators followed by the body text
    pub fn show_message(&mut self, header: &str, body: &str) -> Result<()> {
        if header.is_empty() || body.is_empty() {
            return Err(BetError::InvalidArgument(
                "message header and body must not be empty".to_string(),
            ));
        }
        writeln!(self.output, "{}\n{}\n{}\n{}", SEPARATOR, header, SEPARATOR, body)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn show_menu(&mut self, menu_text: &str) -> Result<()> {
        self.show_message(APP_TITLE, menu_text)
    }

    pub fn show_error(&mut self, error_text: &str) -> Result<()> {
        self.show_message(ERROR_HEADER, error_text)
    }

    pub fn show_info(&mut self, info_text: &str) -> Result<()> {
        self.show_message(INFO_HEADER, info_text)
    }

    /// Render stored bet lines as a table, skipping malformed rows
    pub fn show_bets(&mut self, bet_list: &str) -> Result<usize> {
        let shown = render_bets(bet_list, &mut self.output)?;
        self.output.flush()?;
        Ok(shown)
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BetError::EndOfInput);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

fn or_default<'a>(text: &'a str, default: &'a str) -> &'a str {
    if text.is_empty() {
        default
    } else {
        text
    }
}
