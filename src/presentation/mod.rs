// Presentation layer - Command-line input and output documents
pub mod document;
