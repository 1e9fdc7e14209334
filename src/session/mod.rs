// Presentation-binding layer: one session per open panel/form
pub mod create;
pub mod filter;

pub use create::CreateSession;
pub use filter::{FilterConsumer, FilterSession};
