//! The record processor.
//!
//! Lifecycle: [`Processor::configure`] validates the configuration without
//! touching the network, [`ConfiguredProcessor::open`] learns the target
//! column types and binds converters, and [`Processor::process`] converts
//! batches of records. Each step consumes the previous one, so a processor
//! can only process once it has been opened.

use crate::config::{FieldPlan, ProcessorConfig};
use crate::error::{ConfigError, ProcessorError, RecordError};
use migrator_converters::{Converter, ConverterKind};
use migrator_core::{CollectionSchema, Data, Record, Value, COLLECTION_METADATA_KEY};
use postgresql_catalog::{fetch_collections, Catalog, CatalogError, Repository};
use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Name the processor registers under in the host.
pub const PROCESSOR_NAME: &str = "mysql-datatypes-processor";

/// Processor descriptor reported to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specification {
    pub name: &'static str,
    pub summary: &'static str,
    pub version: &'static str,
}

/// Result of processing one record of a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The record, with its configured fields converted
    Processed(Record),
    /// The record at `position` could not be processed
    Failed { position: String, error: RecordError },
}

impl Outcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, Self::Processed(_))
    }

    pub fn into_record(self) -> Option<Record> {
        match self {
            Self::Processed(record) => Some(record),
            Self::Failed { .. } => None,
        }
    }
}

#[derive(Debug)]
struct FieldConverter {
    field: String,
    converter: Converter,
}

/// A configured processor that has not learned the target schema yet.
#[derive(Debug)]
pub struct ConfiguredProcessor {
    repository: Repository,
    plan: BTreeMap<String, Vec<FieldPlan>>,
    open_timeout: Option<Duration>,
}

impl ConfiguredProcessor {
    /// Collections named in the configuration.
    pub fn collections(&self) -> impl Iterator<Item = &str> {
        self.plan.keys().map(String::as_str)
    }

    /// Connect to the target database, learn the configured collections and
    /// bind their converters.
    ///
    /// The connection is closed again before this returns.
    pub async fn open(self) -> Result<Processor, ProcessorError> {
        with_timeout(self.open_timeout, async {
            let catalog = self.repository.open().await?;
            self.bind(&catalog).await
        })
        .await
    }

    /// Like [`open`](Self::open), but learn the schema from `catalog`.
    pub async fn open_with<C: Catalog + ?Sized>(
        self,
        catalog: &C,
    ) -> Result<Processor, ProcessorError> {
        with_timeout(self.open_timeout, self.bind(catalog)).await
    }

    async fn bind<C: Catalog + ?Sized>(&self, catalog: &C) -> Result<Processor, ProcessorError> {
        let names: Vec<String> = self.plan.keys().cloned().collect();
        let schema = fetch_collections(catalog, &names).await?;
        let collections = bind_converters(&self.plan, &schema)?;

        info!(
            "Bound converters for {} fields in {} collections",
            collections.values().map(Vec::len).sum::<usize>(),
            collections.len()
        );
        Ok(Processor { collections })
    }
}

async fn with_timeout<F, T>(timeout: Option<Duration>, fut: F) -> Result<T, ProcessorError>
where
    F: Future<Output = Result<T, ProcessorError>>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| ProcessorError::OpenTimeout(limit))?,
        None => fut.await,
    }
}

fn bind_converters(
    plan: &BTreeMap<String, Vec<FieldPlan>>,
    schema: &CollectionSchema,
) -> Result<HashMap<String, Vec<FieldConverter>>, ProcessorError> {
    let mut collections = HashMap::with_capacity(plan.len());

    for (collection, fields) in plan {
        let field_types = schema
            .fields(collection)
            .ok_or_else(|| CatalogError::MissingCollection(collection.clone()))?;

        let mut bound = Vec::with_capacity(fields.len());
        for FieldPlan { field, kind } in fields {
            let field_type =
                field_types
                    .field(field)
                    .ok_or_else(|| ProcessorError::MissingField {
                        collection: collection.clone(),
                        field: field.clone(),
                    })?;

            let expected = ConverterKind::for_field_type(field_type);
            if expected != Some(*kind) {
                warn!(
                    "{collection}.{field} is configured as {kind} but the target column is {field_type}"
                );
            }

            let converter =
                kind.bind(field_type)
                    .ok_or_else(|| ProcessorError::IncompatibleField {
                        collection: collection.clone(),
                        field: field.clone(),
                        kind: *kind,
                        field_type: field_type.clone(),
                    })?;
            debug!("Bound {kind} converter to {collection}.{field} ({field_type})");

            bound.push(FieldConverter {
                field: field.clone(),
                converter,
            });
        }

        // Nothing to convert: pass records through like unconfigured ones
        if !bound.is_empty() {
            collections.insert(collection.clone(), bound);
        }
    }

    Ok(collections)
}

/// An opened processor, ready to convert records.
///
/// Never mutated after opening, so it can be shared between threads.
#[derive(Debug)]
pub struct Processor {
    collections: HashMap<String, Vec<FieldConverter>>,
}

impl Processor {
    pub fn specification() -> Specification {
        Specification {
            name: PROCESSOR_NAME,
            summary: "Converts data from MySQL into a format that Postgres can understand",
            version: "v1.0.0",
        }
    }

    /// Validate `config` and build the desired field plan.
    ///
    /// No connection is made until [`ConfiguredProcessor::open`].
    pub fn configure(config: &ProcessorConfig) -> Result<ConfiguredProcessor, ConfigError> {
        let mut repository = Repository::new(config.dsn()?).map_err(ConfigError::InvalidDsn)?;
        if let Some(schema) = &config.schema {
            repository = repository.with_schema(schema.as_str());
        }
        let open_timeout = config.open_timeout()?;
        let plan = config.plan()?;

        debug!(
            "Configured {} collections against {}.{}",
            plan.len(),
            repository.database(),
            repository.schema()
        );

        Ok(ConfiguredProcessor {
            repository,
            plan,
            open_timeout,
        })
    }

    /// Collections with bound converters.
    pub fn collections(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// Process a batch of records in order.
    ///
    /// Processing stops at the first record that fails: the result holds the
    /// outcomes of the records before it followed by its error, and the
    /// remaining records are not evaluated. The processor stays usable for
    /// the next batch.
    pub fn process(&self, records: Vec<Record>) -> Vec<Outcome> {
        let total = records.len();
        let mut out = Vec::with_capacity(total);

        for mut record in records {
            match self.process_record(&mut record) {
                Ok(()) => out.push(Outcome::Processed(record)),
                Err(error) => {
                    warn!(
                        "Record at position {:?} failed, {} records of the batch not evaluated: {error}",
                        record.position,
                        total - out.len() - 1
                    );
                    out.push(Outcome::Failed {
                        position: record.position,
                        error,
                    });
                    break;
                }
            }
        }

        out
    }

    fn process_record(&self, record: &mut Record) -> Result<(), RecordError> {
        let collection = record
            .collection()
            .ok_or(RecordError::MissingCollection {
                key: COLLECTION_METADATA_KEY,
            })?;

        let Some(converters) = self.collections.get(collection) else {
            return Ok(());
        };

        let payload = match record.payload.after.as_mut() {
            Some(Data::Structured(payload)) => payload,
            other => {
                return Err(RecordError::PayloadNotStructured {
                    found: other.map_or("none", |d| d.kind()),
                })
            }
        };

        for FieldConverter { field, converter } in converters {
            let value = payload.remove(field).unwrap_or(Value::Null);
            let converted = converter
                .convert(value)
                .map_err(|source| RecordError::Conversion {
                    field: field.clone(),
                    source,
                })?;
            payload.insert(field.clone(), converted);
        }

        Ok(())
    }
}
