//! Gemini (Generative Language API) primary provider

mod adapter;
mod types;

pub use adapter::GeminiAdapter;
