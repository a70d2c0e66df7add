//! Rowscope: paginated retrieval and display-config inference for remote
//! tabular datasets.
//!
//! Rowscope materializes the full row set of a dataset split from a remote
//! rows API, tolerating transient failures, and derives a presentation
//! configuration from a single sample row when no explicit one exists.
//!
//! # Core Principles
//!
//! - **Exact materialization**: the total reported by the first page is
//!   authoritative; a fetch returns exactly that many rows or fails.
//! - **Schema-free**: rows are ordered maps of tagged values; every field
//!   access is explicitly fallible.
//! - **Deterministic inference**: the same sample row always yields the
//!   same display configuration.
//!
//! # Example
//!
//! ```no_run
//! use rowscope::{generate_default_config, ExplorerSession, Retriever};
//!
//! let retriever = Retriever::new().unwrap();
//! let sample = retriever.fetch_sample("openai/gdpval").unwrap();
//! let config = generate_default_config("openai/gdpval", &sample);
//!
//! let items = retriever
//!     .fetch_all("openai/gdpval", |loaded, total| {
//!         eprintln!("{}/{}", loaded, total);
//!     })
//!     .unwrap();
//!
//! let session = ExplorerSession::new(config, items);
//! println!("{} items loaded", session.total_len());
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod item;
pub mod session;

pub use config::{
    builtin_config, format_label, generate_default_config, DisplayConfig, FilterField,
    MetadataField, StatDefinition, StatKind,
};
pub use error::{Result, RowscopeError};
pub use export::{write_csv, write_json, SnapshotMetadata};
pub use fetch::{RetrievalConfig, Retriever, DEFAULT_API_BASE, ROWS_PER_PAGE};
pub use item::DatasetItem;
pub use session::{ExplorerSession, StatValue};
