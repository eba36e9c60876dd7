use std::fmt::Debug;

use rayexec_error::Result;

use crate::document::Document;

/// One fetch unit from a cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    /// Documents in the order the server returned them.
    pub documents: Vec<Document>,

    /// Server-side cursor id. Zero means the cursor is exhausted and no more
    /// pages will be returned.
    pub cursor_id: i64,
}

impl Page {
    pub fn new(documents: impl IntoIterator<Item = Document>, cursor_id: i64) -> Self {
        Page {
            documents: documents.into_iter().collect(),
            cursor_id,
        }
    }

    /// If this is the last page for the cursor.
    pub const fn is_last(&self) -> bool {
        self.cursor_id == 0
    }
}

/// A server-side cursor over the results of some query.
///
/// Pulling a page is blocking. Implementations are not expected to be thread
/// safe, only one thread may pull from a cursor (and the connection it uses)
/// at a time.
pub trait DocumentCursor: Debug {
    /// Connection the cursor pulls pages over.
    ///
    /// Readers hold this behind an `Arc` so that the caller can keep using the
    /// connection. Sharing a connection between readers that are driven
    /// concurrently is not supported, callers must serialize access.
    type Connection: Debug + ?Sized;

    /// Fetch the next page of documents.
    ///
    /// Errors are transport errors and are returned to the caller as is.
    fn next_page(&mut self, conn: &Self::Connection) -> Result<Page>;
}
