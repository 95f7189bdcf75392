use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{MAX_LINES, MIN_LINES};
use std::io::{BufRead, ErrorKind, Write};

/// Interactive prompts for values not supplied on the command line.
///
/// Invalid answers are reported and asked again; only end of input or an
/// I/O failure ends the loop with an error.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn prompt_line_count(&mut self) -> Result<usize> {
        write!(
            self.output,
            "Please enter the number of lines to process ({} ≤ n ≤ {}): ",
            MIN_LINES, MAX_LINES
        )?;
        loop {
            let answer = self.read_answer()?;
            match answer.parse::<usize>() {
                Ok(n) if (MIN_LINES..=MAX_LINES).contains(&n) => return Ok(n),
                _ => {
                    tracing::debug!("Rejected line count input: {:?}", answer);
                    write!(
                        self.output,
                        "Invalid input! n must be an integer between {} and {}. Please try again: ",
                        MIN_LINES, MAX_LINES
                    )?;
                }
            }
        }
    }

    pub fn prompt_search_key(&mut self) -> Result<i32> {
        write!(
            self.output,
            "Please enter the search key (serial number, integer): "
        )?;
        loop {
            let answer = self.read_answer()?;
            match answer.parse::<i32>() {
                Ok(key) => return Ok(key),
                Err(_) => {
                    tracing::debug!("Rejected search key input: {:?}", answer);
                    write!(
                        self.output,
                        "Invalid input! Search key must be an integer. Please try again: "
                    )?;
                }
            }
        }
    }

    fn read_answer(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(SearchError::IoError(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "input closed before a valid value was entered",
            )));
        }
        Ok(buf.trim().to_string())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_reprompts_until_valid() {
        let input = "abc\n5\n2000000\n  25 \n";
        let mut console = Console::new(input.as_bytes(), Vec::new());
        assert_eq!(console.prompt_line_count().unwrap(), 25);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Invalid input!").count(), 3);
    }

    #[test]
    fn test_search_key_accepts_negative() {
        let mut console = Console::new("x\n-12\n".as_bytes(), Vec::new());
        assert_eq!(console.prompt_search_key().unwrap(), -12);
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut console = Console::new("oops\n".as_bytes(), Vec::new());
        let err = console.prompt_search_key().unwrap_err();
        assert!(matches!(err, SearchError::IoError(ref e) if e.kind() == ErrorKind::UnexpectedEof));
    }
}
