// CLIコマンド実装

pub mod rename;

pub use rename::execute_rename;
