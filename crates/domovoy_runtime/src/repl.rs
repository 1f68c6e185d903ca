//! The interactive command loop.

use std::fmt::Write as _;
use std::io::{self, Write};

use domovoy_foundation::{Error, ErrorKind, Result};

use crate::assistant::{Assistant, Outcome};
use crate::bus::MessageBus;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::voice::Speaker;

const META_COMMANDS: [&str; 4] = [":patterns", ":triggers", ":help", ":quit"];

/// The interactive REPL.
pub struct Repl<B: MessageBus, S: Speaker, E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The assistant utterances are handed to.
    assistant: Assistant<B, S>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl<B: MessageBus, S: Speaker> Repl<B, S, RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(assistant: Assistant<B, S>) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(assistant, editor))
    }
}

impl<B: MessageBus, S: Speaker, E: LineEditor> Repl<B, S, E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(assistant: Assistant<B, S>, mut editor: E) -> Self {
        let keywords = assistant
            .bindings()
            .map(|(trigger, _)| trigger.to_string())
            .chain(META_COMMANDS.iter().map(|c| (*c).to_string()))
            .collect();
        editor.set_keywords(keywords);

        Self {
            editor,
            assistant,
            show_banner: true,
            prompt: "домовой> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the assistant.
    #[must_use]
    pub fn assistant(&self) -> &Assistant<B, S> {
        &self.assistant
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    println!();
                    continue;
                }
                ReadResult::Eof => break,
            };

            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.execute(&line) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => print_error(&e),
            }
        }

        println!("\nДо свидания!");
        Ok(())
    }

    /// Handles one line of input.
    ///
    /// Returns `Ok(false)` when the user asked to quit.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown meta commands or speaker failures.
    pub fn execute(&mut self, line: &str) -> Result<bool> {
        let line = line.trim();
        if line.starts_with(':') {
            return self.meta(line);
        }

        if self.assistant.hear(line)? == Outcome::Ignored {
            eprintln!("\x1b[2m(not a command; start with a trigger word, see :triggers)\x1b[0m");
        }
        Ok(true)
    }

    fn meta(&self, command: &str) -> Result<bool> {
        match command {
            ":patterns" | ":p" => print!("{}", self.patterns_listing()),
            ":triggers" | ":t" => print!("{}", self.triggers_listing()),
            ":help" | ":h" => print_help(),
            ":quit" | ":q" => return Ok(false),
            other => {
                return Err(Error::new(ErrorKind::Internal(format!(
                    "unknown command '{other}'; type :help"
                ))));
            }
        }
        Ok(true)
    }

    /// One line per compiled pattern.
    #[must_use]
    pub fn patterns_listing(&self) -> String {
        listing(self.assistant.engine().patterns())
    }

    /// One `trigger -> action` line per registered trigger.
    #[must_use]
    pub fn triggers_listing(&self) -> String {
        self.assistant
            .bindings()
            .fold(String::new(), |mut out, (trigger, action)| {
                let _ = writeln!(out, "{trigger} -> {action}");
                out
            })
    }

    fn print_banner(&self) {
        println!("\x1b[1;36mДомовой\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        let triggers: Vec<_> = self.assistant.bindings().map(|(t, _)| t).collect();
        println!("Triggers: {}", triggers.join(", "));
        println!("Type :help for commands. Use Ctrl+D to exit.\n");

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}

/// Formats items one per line.
pub fn listing<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter().fold(String::new(), |mut out, item| {
        let _ = writeln!(out, "{item}");
        out
    })
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

fn print_help() {
    println!(
        "Say a command starting with a trigger word, e.g. \"включи лампу\".

    :patterns, :p    List compiled patterns
    :triggers, :t    List trigger words
    :help, :h        Show this help
    :quit, :q        Exit"
    );
}
