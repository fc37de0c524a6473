pub mod terminal;

pub use terminal::{format_page_terminal, format_report_terminal, output_terminal};
