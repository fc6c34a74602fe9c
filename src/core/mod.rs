pub mod compose;
pub mod date;
pub mod output;
pub mod session;
pub mod term;

pub use crate::domain::model::{DegreeRecord, DropdownData, NoDegreeRange, TermSelection, TermYear};
pub use crate::domain::ports::{Clipboard, DropdownSource};
