//! Request processing subsystem.
//!
//! # Data Flow
//! ```text
//! query string → flags.rs (QueryFlags)
//! records + flags → processor.rs (filter, project)
//!     → document.rs (ResponseDocument → XML text)
//! ```
//!
//! Everything here is synchronous and runs to completion once the records
//! are in memory.

pub mod document;
pub mod flags;
pub mod processor;

pub use document::{BankEntry, ProcessingError, ResponseDocument};
pub use flags::QueryFlags;
pub use processor::process;
