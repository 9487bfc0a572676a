//! Logger backends for the dependency-inversion demonstration.
//!
//! Neither backend owns a real sink. Each emits a `tracing` debug event where
//! a real implementation would append to a file or insert a row, which keeps
//! the demonstration observable without any I/O.

use crate::domain::ports::Logger;

#[derive(Debug, Clone, Copy, Default)]
pub struct FileLogger;

impl Logger for FileLogger {
    fn log(&self, message: &str) {
        tracing::debug!("file logger sink: {}", message);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DatabaseLogger;

impl Logger for DatabaseLogger {
    fn log(&self, message: &str) {
        tracing::debug!("database logger sink: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backends_accept_any_message_without_panicking() {
        let loggers: Vec<Box<dyn Logger>> = vec![Box::new(FileLogger), Box::new(DatabaseLogger)];
        for logger in &loggers {
            logger.log("hello");
            logger.log("");
            logger.log("Операция выполнена");
        }
    }
}
