/// Formatter adapters for analysis output
mod json_formatter;

pub use json_formatter::JsonFormatter;
