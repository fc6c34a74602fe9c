pub mod clipboard;
pub mod sheets;
