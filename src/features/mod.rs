//! Multi-step operations composed from the store and outbound clients

pub mod summarize;

pub use summarize::SummarizePipeline;
