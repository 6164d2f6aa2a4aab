//! Console collaborator: the text prompt/response surface the menus talk
//! to.

use std::collections::VecDeque;
use std::io;
use std::io::BufRead;
use std::io::Write;

/// Prompt/response surface for the interactive menus.
///
/// The production implementation wraps stdin/stdout; tests drive the menus
/// with [`ScriptedConsole`].
pub trait Console {
    /// Print one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Print a prompt and read one line of input, without the trailing
    /// newline. A closed input stream is an `UnexpectedEof` error.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Console backed by process stdin/stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", prompt)?;
            stdout.flush()?;
        }

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            ));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Scripted console for driving the menus in tests: pops canned input
/// lines in order and records everything written, prompts included.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn with_inputs(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn output_contains(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.output.push(prompt.to_string());
        self.inputs.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_pops_in_order() {
        let mut console = ScriptedConsole::with_inputs(&["first", "second"]);
        assert_eq!(console.read_line("> ").unwrap(), "first");
        assert_eq!(console.read_line("> ").unwrap(), "second");
        assert!(console.read_line("> ").is_err());
    }

    #[test]
    fn test_scripted_console_records_output() {
        let mut console = ScriptedConsole::with_inputs(&["1"]);
        console.write_line("Main Menu:").unwrap();
        console.read_line("Choose an option: ").unwrap();

        assert!(console.output_contains("Main Menu:"));
        assert!(console.output_contains("Choose an option: "));
    }
}
