use std::cell::RefCell;
use std::io::{BufRead, Write};

use crate::views::Dialogs;

/// Line-oriented terminal over any reader/writer pair.
///
/// Commands and dialog answers come from the same input, so a confirmation
/// consumes the next line the user types.
pub struct Terminal<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    /// Print `prompt` and read one line without its line ending.
    /// `None` once the input is exhausted.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        self.write(prompt);

        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::error!("Failed to read from terminal: {}", e);
                None
            }
        }
    }

    pub fn println(&self, text: &str) {
        self.write(text);
        self.write("\n");
    }

    fn write(&self, text: &str) {
        let mut out = self.output.borrow_mut();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl<R: BufRead, W: Write> Dialogs for Terminal<R, W> {
    fn confirm(&self, message: &str) -> bool {
        match self.read_line(&format!("{} [y/N] ", message)) {
            Some(answer) => matches!(answer.trim(), "y" | "Y" | "yes" | "Yes" | "YES"),
            None => false,
        }
    }

    fn alert(&self, message: &str) {
        self.println(&format!("! {}", message));
    }
}
