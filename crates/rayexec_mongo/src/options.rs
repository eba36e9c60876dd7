use std::collections::HashMap;
use std::fmt;

use rayexec_bullet::scalar::OwnedScalarValue;
use rayexec_error::{RayexecError, Result};

/// Default cap on the number of rows read into a single batch.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 8192;

/// How a field that's present but `Null` gets handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullBehavior {
    /// Treat the field as if it were missing from the document, using the
    /// column's default value.
    #[default]
    UseDefault,
    /// Numeric columns get zero, all other columns error with a type mismatch.
    Strict,
}

impl NullBehavior {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(Self::UseDefault),
            "strict" => Ok(Self::Strict),
            other => Err(RayexecError::new(format!(
                "Invalid null behavior '{other}', expected 'default' or 'strict'"
            ))),
        }
    }
}

impl fmt::Display for NullBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UseDefault => write!(f, "default"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MongoReaderOptions {
    /// Soft cap on rows per batch.
    ///
    /// Only checked between page pulls. A page is always read in full, so a
    /// batch may exceed this by up to one page worth of rows.
    pub max_batch_size: usize,

    pub null_behavior: NullBehavior,
}

impl Default for MongoReaderOptions {
    fn default() -> Self {
        MongoReaderOptions {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            null_behavior: NullBehavior::default(),
        }
    }
}

impl MongoReaderOptions {
    /// Build options from a generic options map.
    ///
    /// Recognized keys are "max_batch_size" and "null_behavior". Missing keys
    /// use the default, unknown keys are an error.
    pub fn from_options(mut options: HashMap<String, OwnedScalarValue>) -> Result<Self> {
        let mut opts = Self::default();

        if let Some(size) = take_option("max_batch_size", &mut options) {
            opts.max_batch_size = size.try_as_usize()?;
        }
        if let Some(behavior) = take_option("null_behavior", &mut options) {
            opts.null_behavior = NullBehavior::from_name(behavior.try_as_str()?)?;
        }

        check_options_empty(&options)?;
        opts.validate()?;

        Ok(opts)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_batch_size == 0 {
            return Err(RayexecError::new("max_batch_size must be greater than zero"));
        }
        Ok(())
    }
}

/// Remove an option from the map if it exists.
pub fn take_option(
    name: &str,
    options: &mut HashMap<String, OwnedScalarValue>,
) -> Option<OwnedScalarValue> {
    options.remove(name)
}

/// Error if any options remain in the map.
pub fn check_options_empty(options: &HashMap<String, OwnedScalarValue>) -> Result<()> {
    if options.is_empty() {
        return Ok(());
    }

    let mut keys: Vec<_> = options.keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();

    Err(RayexecError::new(format!(
        "Unexpected extra options: {}",
        keys.join(", ")
    )))
}
