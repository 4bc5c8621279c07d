use std::fmt;

/// A single validation failure recorded against a context (usually the entity name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationErrorProps {
    pub context: String,
    pub message: String,
}

impl NotificationErrorProps {
    pub fn new(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for NotificationErrorProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.message)
    }
}

/// Collects validation failures so that every violated rule is reported at once.
#[derive(Debug, Default)]
pub struct Notification {
    errors: Vec<NotificationErrorProps>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: NotificationErrorProps) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors in the order they were recorded.
    pub fn errors(&self) -> &[NotificationErrorProps] {
        &self.errors
    }

    /// Formats recorded errors as `"context: message"` joined by `", "`.
    ///
    /// When `context` is given only errors recorded against it are included.
    pub fn messages(&self, context: Option<&str>) -> String {
        self.errors
            .iter()
            .filter(|error| context.is_none_or(|ctx| error.context == ctx))
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Turns the collected errors into a single failure, if any were recorded.
    pub fn into_result(self) -> Result<(), NotificationError> {
        if self.has_errors() {
            Err(NotificationError {
                errors: self.errors,
            })
        } else {
            Ok(())
        }
    }
}

/// Aggregate validation failure carrying every recorded error in order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", format_errors(.errors))]
pub struct NotificationError {
    pub errors: Vec<NotificationErrorProps>,
}

impl NotificationError {
    /// Individual messages without their context prefix.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }
}

fn format_errors(errors: &[NotificationErrorProps]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
