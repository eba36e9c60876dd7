//! In-memory cursor and connection.
//!
//! Serves pre-built pages without any network access.
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayexec_error::{RayexecError, Result};
use tracing::trace;

use crate::cursor::{DocumentCursor, Page};

#[derive(Debug, Default)]
pub struct MemoryConnection {
    /// Number of pages pulled over this connection.
    pulls: AtomicUsize,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of page pulls that have gone through this connection, including
    /// ones that errored.
    pub fn num_pulls(&self) -> usize {
        self.pulls.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Default)]
pub struct MemoryCursor {
    pages: VecDeque<Result<Page>>,
}

impl MemoryCursor {
    pub fn new(pages: impl IntoIterator<Item = Page>) -> Self {
        MemoryCursor {
            pages: pages.into_iter().map(Ok).collect(),
        }
    }

    /// Queue an error to be returned after all previously queued pages.
    pub fn with_error(mut self, error: RayexecError) -> Self {
        self.pages.push_back(Err(error));
        self
    }

    /// Queue another page.
    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push_back(Ok(page));
        self
    }

    pub fn num_remaining(&self) -> usize {
        self.pages.len()
    }
}

impl DocumentCursor for MemoryCursor {
    type Connection = MemoryConnection;

    fn next_page(&mut self, conn: &Self::Connection) -> Result<Page> {
        conn.pulls.fetch_add(1, Ordering::Relaxed);
        trace!(remaining = self.pages.len(), "memory cursor pull");

        match self.pages.pop_front() {
            Some(result) => result,
            None => Err(RayexecError::new("Cursor has no more pages")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn pages_then_error() {
        let conn = MemoryConnection::new();
        let mut cursor = MemoryCursor::new([Page::new([Document::new()], 5)])
            .with_error(RayexecError::new("connection reset"));

        let page = cursor.next_page(&conn).unwrap();
        assert_eq!(1, page.documents.len());
        assert!(!page.is_last());

        let err = cursor.next_page(&conn).unwrap_err();
        assert_eq!("connection reset", err.get_msg());

        cursor.next_page(&conn).unwrap_err();
        assert_eq!(3, conn.num_pulls());
        assert_eq!(0, cursor.num_remaining());
    }
}
