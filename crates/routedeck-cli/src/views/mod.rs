pub mod console;
pub mod table;
pub mod terminal;

pub use console::{PagePrinter, ScreenView};
pub use table::{error_lines, page_lines};
pub use terminal::{AnsiTerminal, MockTerminal, TerminalWriter};
