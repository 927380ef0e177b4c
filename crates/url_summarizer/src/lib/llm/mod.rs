pub mod groq;
pub mod summarizer;
