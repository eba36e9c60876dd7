use rayexec_bullet::array::Array;
use rayexec_bullet::datatype::DataType;
use rayexec_bullet::field::{Field, Schema};
use rayexec_bullet::scalar::OwnedScalarValue;
use rayexec_error::{RayexecError, Result};

/// Description of a single output column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescription {
    /// Name of the column, also the document field to read from.
    pub name: String,
    pub datatype: DataType,
    /// Value used when a document doesn't contain the field.
    pub default: OwnedScalarValue,
}

/// Describes the shape of batches produced from an external source.
///
/// Built once from a sample schema, immutable afterwards. Column defaults are
/// either configured per column, or the zero/empty value for the column's
/// type.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalResultDescription {
    columns: Vec<ColumnDescription>,
}

impl ExternalResultDescription {
    pub fn init(sample: &Schema) -> Self {
        let columns = sample
            .fields
            .iter()
            .map(|field| ColumnDescription {
                name: field.name.clone(),
                datatype: field.datatype,
                default: field.datatype.default_scalar(),
            })
            .collect();

        ExternalResultDescription { columns }
    }

    /// Create a description using configured defaults.
    ///
    /// There must be exactly one entry per field in the sample. A `None`
    /// entry falls back to the zero/empty value for the field's type.
    pub fn try_init_with_defaults(
        sample: &Schema,
        defaults: impl IntoIterator<Item = Option<OwnedScalarValue>>,
    ) -> Result<Self> {
        let defaults: Vec<_> = defaults.into_iter().collect();
        if defaults.len() != sample.len() {
            return Err(RayexecError::new(format!(
                "Expected {} column defaults, got {}",
                sample.len(),
                defaults.len()
            )));
        }

        let columns = sample
            .fields
            .iter()
            .zip(defaults)
            .map(|(field, default)| {
                let default = match default {
                    Some(default) => {
                        if default.datatype() != field.datatype {
                            return Err(RayexecError::new(format!(
                                "Default for column '{}' has type {}, expected {}",
                                field.name,
                                default.datatype(),
                                field.datatype
                            )));
                        }
                        default
                    }
                    None => field.datatype.default_scalar(),
                };

                Ok(ColumnDescription {
                    name: field.name.clone(),
                    datatype: field.datatype,
                    default,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ExternalResultDescription { columns })
    }

    pub fn column(&self, idx: usize) -> Option<&ColumnDescription> {
        self.columns.get(idx)
    }

    pub fn columns(&self) -> &[ColumnDescription] {
        &self.columns
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get the schema of the batches being described.
    pub fn schema(&self) -> Schema {
        Schema::new(
            self.columns
                .iter()
                .map(|c| Field::new(c.name.clone(), c.datatype, false)),
        )
    }

    /// Create empty arrays for every column.
    pub(crate) fn new_arrays(&self, cap: usize) -> Vec<Array> {
        self.columns
            .iter()
            .map(|c| Array::with_capacity(c.datatype, cap))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rayexec_bullet::scalar::ScalarValue;

    use super::*;

    #[test]
    fn init_from_sample() {
        let sample = Schema::new([
            Field::new("id", DataType::UInt32, false),
            Field::new("name", DataType::Utf8, true),
            Field::new("created", DataType::DateTime, true),
        ]);

        let desc = ExternalResultDescription::init(&sample);
        assert_eq!(3, desc.len());
        assert_eq!(vec!["id", "name", "created"], desc.names().collect::<Vec<_>>());

        let name = desc.column(1).unwrap();
        assert_eq!(DataType::Utf8, name.datatype);
        assert_eq!(ScalarValue::Utf8("".into()), name.default);

        assert_eq!(ScalarValue::UInt32(0), desc.column(0).unwrap().default);
        assert_eq!(ScalarValue::DateTime(0), desc.column(2).unwrap().default);
        assert_eq!(None, desc.column(3));
    }

    #[test]
    fn schema_roundtrip_types() {
        let sample = Schema::new([
            Field::new("a", DataType::Int8, false),
            Field::new("b", DataType::Float64, false),
        ]);

        let desc = ExternalResultDescription::init(&sample);
        assert_eq!(sample, desc.schema());

        let arrays = desc.new_arrays(4);
        assert_eq!(2, arrays.len());
        assert_eq!(DataType::Float64, arrays[1].datatype());
        assert!(arrays.iter().all(|a| a.is_empty()));
    }

    #[test]
    fn init_with_configured_defaults() {
        let sample = Schema::new([
            Field::new("id", DataType::UInt32, false),
            Field::new("name", DataType::Utf8, false),
            Field::new("day", DataType::Date, false),
        ]);

        let desc = ExternalResultDescription::try_init_with_defaults(
            &sample,
            [
                Some(ScalarValue::UInt32(42)),
                Some(ScalarValue::from("n/a")),
                None,
            ],
        )
        .unwrap();

        assert_eq!(ScalarValue::UInt32(42), desc.column(0).unwrap().default);
        assert_eq!(ScalarValue::Utf8("n/a".into()), desc.column(1).unwrap().default);
        assert_eq!(ScalarValue::Date(0), desc.column(2).unwrap().default);
        assert_eq!(sample, desc.schema());
    }

    #[test]
    fn init_with_defaults_invalid() {
        let sample = Schema::new([
            Field::new("id", DataType::UInt32, false),
            Field::new("name", DataType::Utf8, false),
        ]);

        // Wrong type for the column.
        let err = ExternalResultDescription::try_init_with_defaults(
            &sample,
            [Some(ScalarValue::Int64(42)), None],
        )
        .unwrap_err();
        assert!(err.get_msg().contains("'id'"), "{err}");

        // Wrong number of defaults.
        ExternalResultDescription::try_init_with_defaults(&sample, [None]).unwrap_err();
    }
}
