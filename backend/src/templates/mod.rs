pub mod shell;

pub use shell::ShellDocument;
