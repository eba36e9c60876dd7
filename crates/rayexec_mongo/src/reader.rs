use std::sync::Arc;

use rayexec_bullet::batch::Batch;
use rayexec_bullet::field::Schema;
use rayexec_error::{RayexecError, Result};
use tracing::{debug, trace};

use crate::convert::insert_value;
use crate::cursor::DocumentCursor;
use crate::description::ExternalResultDescription;
use crate::document::Element;
use crate::options::{MongoReaderOptions, NullBehavior};

/// Reads batches from a document cursor.
///
/// Each call to `read_next` pulls pages from the cursor until at least
/// `max_batch_size` rows have been read or the cursor is exhausted. Pages are
/// never split, so a batch can end up larger than `max_batch_size`.
///
/// Once a page indicating the cursor is exhausted is seen, every following
/// call returns an empty batch without touching the cursor.
#[derive(Debug)]
pub struct MongoBatchReader<C: DocumentCursor> {
    connection: Arc<C::Connection>,
    /// Boxed to give the reader a stable identity, see `id`.
    cursor: Box<C>,
    description: ExternalResultDescription,
    options: MongoReaderOptions,
    /// If we've seen the last page from the cursor.
    all_read: bool,
    /// Total rows read over the lifetime of the reader.
    rows_read: usize,
    /// Total pages pulled over the lifetime of the reader.
    pages_read: usize,
}

impl<C: DocumentCursor> MongoBatchReader<C> {
    /// Create a reader with column defaults derived from the sample's types.
    pub fn try_new(
        connection: Arc<C::Connection>,
        cursor: C,
        sample: &Schema,
        options: MongoReaderOptions,
    ) -> Result<Self> {
        Self::try_new_with_description(
            connection,
            cursor,
            ExternalResultDescription::init(sample),
            options,
        )
    }

    /// Create a reader from an existing description, e.g. one with
    /// configured column defaults.
    pub fn try_new_with_description(
        connection: Arc<C::Connection>,
        cursor: C,
        description: ExternalResultDescription,
        options: MongoReaderOptions,
    ) -> Result<Self> {
        options.validate()?;
        if description.is_empty() {
            return Err(RayexecError::new(
                "Cannot read from a cursor with an empty schema",
            ));
        }

        Ok(MongoBatchReader {
            connection,
            cursor: Box::new(cursor),
            description,
            options,
            all_read: false,
            rows_read: 0,
            pages_read: 0,
        })
    }

    /// Identifier for this reader, derived from the address of its cursor.
    pub fn id(&self) -> String {
        format!("MongoDB(@{:p})", self.cursor)
    }

    pub fn description(&self) -> &ExternalResultDescription {
        &self.description
    }

    pub fn connection(&self) -> &Arc<C::Connection> {
        &self.connection
    }

    pub fn is_exhausted(&self) -> bool {
        self.all_read
    }

    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub fn pages_read(&self) -> usize {
        self.pages_read
    }

    /// Read the next batch.
    ///
    /// Returns an empty batch (no columns, no rows) when there's nothing left
    /// to read.
    ///
    /// Any error aborts the whole batch. Rows converted from pages pulled
    /// during a failed call are lost.
    pub fn read_next(&mut self) -> Result<Batch> {
        if self.all_read {
            return Ok(Batch::empty());
        }

        let max_batch_size = self.options.max_batch_size;
        let mut arrays = self.description.new_arrays(max_batch_size);

        let mut num_rows = 0;
        while num_rows < max_batch_size {
            let page = self.cursor.next_page(&self.connection)?;
            trace!(
                id = %self.id(),
                cursor_id = page.cursor_id,
                num_documents = page.documents.len(),
                "pulled page"
            );

            for document in &page.documents {
                num_rows += 1;

                for (column, array) in self.description.columns().iter().zip(arrays.iter_mut()) {
                    match document.get(&column.name) {
                        None => array.push_scalar(&column.default)?,
                        Some(Element::Null)
                            if self.options.null_behavior == NullBehavior::UseDefault =>
                        {
                            array.push_scalar(&column.default)?
                        }
                        Some(value) => insert_value(array, value, &column.name)?,
                    }
                }
            }

            self.pages_read += 1;

            if page.is_last() {
                debug!(id = %self.id(), pages_read = self.pages_read, "cursor exhausted");
                self.all_read = true;
                break;
            }
        }

        if num_rows == 0 {
            return Ok(Batch::empty());
        }

        self.rows_read += num_rows;
        let batch = Batch::try_new(arrays)?;
        debug!(
            id = %self.id(),
            num_rows = batch.num_rows(),
            rows_read = self.rows_read,
            "read batch"
        );

        Ok(batch)
    }
}
