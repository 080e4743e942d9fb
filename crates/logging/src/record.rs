//! crates/logging/src/record.rs
//! The transient record rendered for one log line.

use std::fmt;

/// A key paired with a value rendered through [`fmt::Display`].
pub type Field<'a> = (&'static str, &'a dyn fmt::Display);

/// Message, source location and key/value fields for one log line.
///
/// Records borrow everything they render and live only for the duration of
/// a single log call. The [`Display`](fmt::Display) implementation produces
/// the line without its trailing newline:
///
/// ```
/// use logging::{Field, Record};
///
/// let attempts = 3;
/// let fields: [Field<'_>; 2] = [("peer", &"10.0.0.7"), ("attempt", &attempts)];
/// let record = Record::new("src/net.rs", 42, "retrying", &fields);
/// assert_eq!(record.to_string(), "[src/net.rs:42] retrying peer=10.0.0.7 attempt=3");
/// ```
#[derive(Clone, Copy)]
pub struct Record<'a> {
    file: &'static str,
    line: u32,
    message: &'a str,
    fields: &'a [Field<'a>],
}

impl<'a> Record<'a> {
    /// Creates a record. Fields are rendered in the order given.
    #[must_use]
    pub const fn new(
        file: &'static str,
        line: u32,
        message: &'a str,
        fields: &'a [Field<'a>],
    ) -> Self {
        Self {
            file,
            line,
            message,
            fields,
        }
    }

    /// Source file of the log call.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Source line of the log call.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// The fixed message text.
    #[must_use]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// The key/value fields, in call order.
    #[must_use]
    pub const fn fields(&self) -> &'a [Field<'a>] {
        self.fields
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}] {}", self.file, self.line, self.message)?;
        for (key, value) in self.fields {
            write!(f, " {key}={value}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.fields.iter().map(|(key, _)| *key).collect();
        f.debug_struct("Record")
            .field("file", &self.file)
            .field("line", &self.line)
            .field("message", &self.message)
            .field("keys", &keys)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_location_and_message_without_fields() {
        let record = Record::new("src/lib.rs", 7, "Message.", &[]);
        assert_eq!(record.to_string(), "[src/lib.rs:7] Message.");
    }

    #[test]
    fn renders_fields_in_call_order() {
        let fields: [Field<'_>; 3] = [("key3", &3), ("key1", &"one"), ("key2", &2.5)];
        let record = Record::new("src/lib.rs", 9, "Message.", &fields);
        assert_eq!(
            record.to_string(),
            "[src/lib.rs:9] Message. key3=3 key1=one key2=2.5"
        );
    }

    #[test]
    fn repeated_keys_are_kept() {
        let fields: [Field<'_>; 2] = [("k", &1), ("k", &2)];
        let record = Record::new("a.rs", 1, "m", &fields);
        assert_eq!(record.to_string(), "[a.rs:1] m k=1 k=2");
    }

    #[test]
    fn accessors_expose_parts() {
        let fields: [Field<'_>; 1] = [("user", &"ada")];
        let record = Record::new("src/auth.rs", 12, "login", &fields);

        assert_eq!(record.file(), "src/auth.rs");
        assert_eq!(record.line(), 12);
        assert_eq!(record.message(), "login");
        assert_eq!(record.fields().len(), 1);
        assert_eq!(record.fields()[0].0, "user");
    }

    #[test]
    fn debug_lists_keys_only() {
        let fields: [Field<'_>; 1] = [("user", &"ada")];
        let record = Record::new("src/auth.rs", 12, "login", &fields);
        let debug = format!("{record:?}");
        assert!(debug.contains("Record"));
        assert!(debug.contains("\"user\""));
        assert!(!debug.contains("ada"));
    }
}
