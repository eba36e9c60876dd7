use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;

pub type Result<T, E = RayexecError> = std::result::Result<T, E>;

#[derive(Debug)]
pub struct RayexecError {
    inner: Box<RayexecErrorInner>,
}

#[derive(Debug)]
struct RayexecErrorInner {
    /// Message for the error.
    msg: String,

    /// Source of the error.
    source: Option<Box<dyn Error + Send + Sync>>,

    /// Captured backtrace.
    ///
    /// Only populated when `RUST_BACKTRACE` (or `RUST_LIB_BACKTRACE`) is set.
    backtrace: Backtrace,
}

impl RayexecError {
    pub fn new(msg: impl Into<String>) -> Self {
        RayexecError {
            inner: Box::new(RayexecErrorInner {
                msg: msg.into(),
                source: None,
                backtrace: Backtrace::capture(),
            }),
        }
    }

    pub fn with_source(msg: impl Into<String>, source: Box<dyn Error + Send + Sync>) -> Self {
        RayexecError {
            inner: Box::new(RayexecErrorInner {
                msg: msg.into(),
                source: Some(source),
                backtrace: Backtrace::capture(),
            }),
        }
    }

    pub fn get_msg(&self) -> &str {
        self.inner.msg.as_str()
    }

    pub fn get_backtrace(&self) -> &Backtrace {
        &self.inner.backtrace
    }

    /// Try to get the source error as a concrete type.
    pub fn downcast_source<E: Error + 'static>(&self) -> Option<&E> {
        self.inner.source.as_ref()?.downcast_ref::<E>()
    }
}

impl fmt::Display for RayexecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.msg)?;
        if let Some(source) = &self.inner.source {
            write!(f, "\nError source: {source}")?;
        }

        if self.inner.backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\nBacktrace: {}", self.inner.backtrace)?;
        }

        Ok(())
    }
}

impl Error for RayexecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Inner(u8);

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "inner {}", self.0)
        }
    }

    impl Error for Inner {}

    #[test]
    fn display_includes_source() {
        let err = RayexecError::with_source("outer", Box::new(Inner(3)));
        let s = err.to_string();
        assert!(s.starts_with("outer\nError source: inner 3"), "{s}");
    }

    #[test]
    fn downcast_source() {
        let err = RayexecError::with_source("outer", Box::new(Inner(3)));
        assert_eq!(Some(&Inner(3)), err.downcast_source::<Inner>());

        let err = RayexecError::new("no source");
        assert_eq!(None, err.downcast_source::<Inner>());
    }
}
