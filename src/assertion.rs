//! Fluent assertions.
//!
//! Every method consumes the subject and hands it back on success, so a chain
//! written with `?` stops at the first failing predicate:
//!
//! ```
//! use greetcheck::assertion::assert_that;
//!
//! fn greet() -> greetcheck::Result<()> {
//!     assert_that(true).is_true()?;
//!     assert_that("Hello World!")
//!         .is_not_blank()?
//!         .starts_with("Hello")?
//!         .ends_with("World!")?
//!         .contains("World")?;
//!     Ok(())
//! }
//! # greet().unwrap();
//! ```

use crate::check::CheckStep;
use crate::errors::{CheckError, Result};
use crate::predicate;

/// Values that `assert_that` knows how to wrap.
pub trait Subject<'a> {
    type Assert;

    fn into_assert(self) -> Self::Assert;
}

impl<'a> Subject<'a> for bool {
    type Assert = BoolAssert;

    fn into_assert(self) -> BoolAssert {
        BoolAssert { actual: self }
    }
}

impl<'a> Subject<'a> for &'a str {
    type Assert = StrAssert<'a>;

    fn into_assert(self) -> StrAssert<'a> {
        StrAssert { actual: self }
    }
}

impl<'a> Subject<'a> for &'a String {
    type Assert = StrAssert<'a>;

    fn into_assert(self) -> StrAssert<'a> {
        StrAssert {
            actual: self.as_str(),
        }
    }
}

pub fn assert_that<'a, T: Subject<'a>>(value: T) -> T::Assert {
    value.into_assert()
}

#[derive(Debug, Clone, Copy)]
pub struct BoolAssert {
    actual: bool,
}

impl BoolAssert {
    pub fn is_true(self) -> Result<Self> {
        if self.actual {
            Ok(self)
        } else {
            Err(CheckError::assertion(CheckStep::Flag, "expected true"))
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StrAssert<'a> {
    actual: &'a str,
}

impl<'a> StrAssert<'a> {
    pub fn actual(&self) -> &'a str {
        self.actual
    }

    pub fn is_not_blank(self) -> Result<Self> {
        if predicate::is_non_blank(self.actual) {
            Ok(self)
        } else {
            Err(CheckError::assertion(
                CheckStep::NonBlank,
                "expected non-blank string",
            ))
        }
    }

    pub fn starts_with(self, prefix: &str) -> Result<Self> {
        if predicate::starts_with(self.actual, prefix) {
            Ok(self)
        } else {
            Err(CheckError::assertion(
                CheckStep::StartsWith,
                format!("expected {:?} to start with {:?}", self.actual, prefix),
            ))
        }
    }

    pub fn ends_with(self, suffix: &str) -> Result<Self> {
        if predicate::ends_with(self.actual, suffix) {
            Ok(self)
        } else {
            Err(CheckError::assertion(
                CheckStep::EndsWith,
                format!("expected {:?} to end with {:?}", self.actual, suffix),
            ))
        }
    }

    pub fn contains(self, needle: &str) -> Result<Self> {
        if predicate::contains(self.actual, needle) {
            Ok(self)
        } else {
            Err(CheckError::assertion(
                CheckStep::Contains,
                format!("expected {:?} to contain {:?}", self.actual, needle),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_assert() {
        assert!(assert_that(true).is_true().is_ok());
        let err = assert_that(false).is_true().unwrap_err();
        assert_eq!(err.step(), Some(CheckStep::Flag));
        assert_eq!(err.to_string(), "flag failed: expected true");
    }

    #[test]
    fn test_chain_stops_at_first_failure() {
        let result = assert_that("Hello World!")
            .is_not_blank()
            .and_then(|a| a.starts_with("hello"))
            .and_then(|a| a.ends_with("nope"));
        let err = result.unwrap_err();
        assert_eq!(err.step(), Some(CheckStep::StartsWith));
    }

    #[test]
    fn test_owned_string_subject() {
        let greeting = String::from("Hello World!");
        let subject = assert_that(&greeting).contains("World").unwrap();
        assert_eq!(subject.actual(), "Hello World!");
    }

    #[test]
    fn test_failure_messages_quote_values() {
        let err = assert_that("Hi there").ends_with("World!").unwrap_err();
        match err {
            CheckError::AssertionFailure { step, message } => {
                assert_eq!(step, CheckStep::EndsWith);
                assert_eq!(message, r#"expected "Hi there" to end with "World!""#);
            }
            other => panic!("Expected AssertionFailure, got {:?}", other),
        }
    }
}
