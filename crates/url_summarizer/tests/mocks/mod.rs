pub mod page_loader;
pub mod summarizer;
pub mod transcript_api;
