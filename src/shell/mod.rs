/*!
 * Shell Module
 * Terminal input provider and table trace sink for the binary
 */

pub mod input;
pub mod table;

pub use input::Prompter;
pub use table::{write_report, TablePrinter};
