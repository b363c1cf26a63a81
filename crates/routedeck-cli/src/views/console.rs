use crate::args::OutputFormat;
use crate::views::table::{error_lines, page_lines};
use crate::views::terminal::TerminalWriter;
use routedeck_app::{ListPresenter, ViewState};
use routedeck_types::Route;

/// One-shot presenter for `routedeck list`: prints the page (or the inline
/// error placeholder) to stdout and returns.
pub struct PagePrinter {
    format: OutputFormat,
}

impl PagePrinter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl ListPresenter for PagePrinter {
    fn render_page(&mut self, routes: &[Route], state: &ViewState) {
        match self.format {
            OutputFormat::Plain => {
                for line in page_lines(routes, state) {
                    println!("{}", line);
                }
            }
            OutputFormat::Json => match serde_json::to_string_pretty(routes) {
                Ok(json) => println!("{}", json),
                Err(err) => eprintln!("Failed to encode page as JSON: {}", err),
            },
        }
    }

    fn render_error(&mut self, message: &str, state: &ViewState) {
        for line in error_lines(message, state) {
            eprintln!("{}", line);
        }
    }
}

/// Full-screen presenter for the watch view: every render clears and
/// repaints, so the display is always internally consistent for whichever
/// response arrived last.
pub struct ScreenView<T: TerminalWriter> {
    terminal: T,
    key_help: &'static str,
}

impl<T: TerminalWriter> ScreenView<T> {
    pub fn new(terminal: T) -> Self {
        Self {
            terminal,
            key_help: "n/→ next page · p/← previous page · c clear filter · r refresh · q quit",
        }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    fn paint(&mut self, lines: Vec<String>) {
        self.terminal.clear_screen();
        for line in lines {
            self.terminal.write_line(&line);
        }
        self.terminal.write_line("");
        self.terminal.write_line(self.key_help);
        self.terminal.flush();
    }
}

impl<T: TerminalWriter> ListPresenter for ScreenView<T> {
    fn render_page(&mut self, routes: &[Route], state: &ViewState) {
        self.paint(page_lines(routes, state));
    }

    fn render_error(&mut self, message: &str, state: &ViewState) {
        self.paint(error_lines(message, state));
    }
}
