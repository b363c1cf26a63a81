use std::io::Write;

/// Output seam for the full-replace screen renderer, so view rendering can
/// be asserted against in tests without a terminal.
pub trait TerminalWriter: Send {
    fn clear_screen(&mut self);
    fn write_line(&mut self, line: &str);
    fn flush(&mut self);
}

/// Real terminal. Lines end with `\r\n` because the watch view runs in raw
/// mode.
pub struct AnsiTerminal;

impl Default for AnsiTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl AnsiTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl TerminalWriter for AnsiTerminal {
    fn clear_screen(&mut self) {
        print!("\x1B[2J\x1B[1;1H");
    }

    fn write_line(&mut self, line: &str) {
        print!("{}\r\n", line);
    }

    fn flush(&mut self) {
        let _ = std::io::stdout().flush();
    }
}

/// Test double that records what was rendered.
#[derive(Default)]
pub struct MockTerminal {
    pub lines: Vec<String>,
    pub clear_count: usize,
    pub flush_count: usize,
}

impl MockTerminal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TerminalWriter for MockTerminal {
    fn clear_screen(&mut self) {
        self.clear_count += 1;
        self.lines.clear();
    }

    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn flush(&mut self) {
        self.flush_count += 1;
    }
}
