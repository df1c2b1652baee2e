//! Data source subsystem.
//!
//! # Data Flow
//! ```text
//! JSON file on disk
//!     → loader.rs (read + parse, once per request)
//!     → record.rs (loosely typed BankRecord)
//!     → processing
//! ```

pub mod loader;
pub mod record;

pub use loader::{DataLoadError, DataLoader};
pub use record::BankRecord;
