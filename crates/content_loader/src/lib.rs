//! # Content Loader
//!
//! Retrieves the textual content behind a URL. Two sources are supported:
//! caption tracks of a YouTube video ([`youtube`]) and the readable text of a
//! generic web page ([`page`]). Both yield plain text that is folded into a
//! single [`Document`].

mod document;
mod error;
pub mod page;
pub mod youtube;

pub use document::{Document, TranscriptSegment};
pub use error::FetchError;
pub use page::{HtmlPageLoader, LoadRequest, PageLoader};
pub use youtube::{TranscriptApi, YtTranscriptApi};
