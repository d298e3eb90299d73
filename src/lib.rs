//! MySQL to PostgreSQL record processor
//!
//! Rewrites selected fields of change records captured from MySQL so that
//! PostgreSQL accepts them on write:
//!
//! - Boolean fields: MySQL `TINYINT(1)` style scalars become strict booleans
//! - Set fields: comma-joined `SET` values become quoted array literals,
//!   validated against the target enum type
//! - Timestamp fields: zero timestamps become NULL
//!
//! The target column types are learned once from the PostgreSQL catalog
//! when the processor opens, see [`postgresql_catalog`].
//!
//! # Usage
//!
//! ```no_run
//! use mysql_pg_migrator::{Processor, ProcessorConfig};
//!
//! # async fn run(records: Vec<migrator_core::Record>) -> anyhow::Result<()> {
//! let config = ProcessorConfig::from_yaml(
//!     "dsn: postgres://localhost/shop\ncollections:\n  users:\n    boolean_fields: is_active\n",
//! )?;
//! let processor = Processor::configure(&config)?.open().await?;
//! for outcome in processor.process(records) {
//!     println!("{outcome:?}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod processor;

pub use config::{CollectionConfig, FieldPlan, ProcessorConfig};
pub use error::{ConfigError, ProcessorError, RecordError};
pub use processor::{ConfiguredProcessor, Outcome, Processor, Specification, PROCESSOR_NAME};
