pub mod terminal;

pub use terminal::TerminalUi;
