use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Line-based prompts over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Writes `label` without a newline and reads one line, trailing newline removed.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line(label)
    }

    pub fn ask_number(&mut self, label: &str) -> Result<i32> {
        let answer = self.ask(label)?;
        parse_number(&answer, label)
    }

    /// Prints a menu, one option per line, then reads the numeric choice.
    /// `label` names the field in parse errors.
    pub fn choose(&mut self, label: &str, options: &[&str]) -> Result<i32> {
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, option)?;
        }
        self.output.flush()?;

        let answer = self.read_line(label)?;
        parse_number(&answer, label)
    }

    fn read_line(&mut self, label: &str) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .with_context(|| format!("Failed to read {}", field_name(label)))?;
        if read == 0 {
            bail!("Input closed before {}", field_name(label));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn parse_number(answer: &str, label: &str) -> Result<i32> {
    answer
        .trim()
        .parse()
        .with_context(|| format!("Invalid number for {}: {:?}", field_name(label), answer))
}

fn field_name(label: &str) -> &str {
    label.trim().trim_end_matches(':')
}
