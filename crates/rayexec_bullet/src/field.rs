use crate::datatype::DataType;

/// A named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub datatype: DataType,
    pub nullable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, datatype: DataType, nullable: bool) -> Self {
        Field {
            name: name.into(),
            datatype,
            nullable,
        }
    }
}

/// Represents the full schema of an output batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        Schema {
            fields: fields.into_iter().collect(),
        }
    }

    pub const fn empty() -> Self {
        Schema { fields: Vec::new() }
    }

    /// Get the data types for all fields in this schema.
    pub fn datatypes(&self) -> impl Iterator<Item = DataType> + '_ {
        self.fields.iter().map(|f| f.datatype)
    }

    /// Get the index of a field by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_of() {
        let schema = Schema::new([
            Field::new("id", DataType::UInt32, false),
            Field::new("name", DataType::Utf8, true),
        ]);

        assert_eq!(Some(1), schema.index_of("name"));
        assert_eq!(None, schema.index_of("missing"));
        assert_eq!(
            vec![DataType::UInt32, DataType::Utf8],
            schema.datatypes().collect::<Vec<_>>()
        );
    }
}
