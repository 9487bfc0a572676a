//! The dependency-injected service from the dependency-inversion example.
//!
//! The service depends on the [`Logger`] capability, never on a concrete
//! backend. The logger is supplied at construction and owned for the
//! service's lifetime.

use crate::domain::ports::Logger;

pub struct Service<L: Logger> {
    logger: L,
}

impl<L: Logger> Service<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Performs the unit of work. The only observable effect is a single
    /// call to the injected logger.
    pub fn do_something(&self) {
        self.logger.log("Операция выполнена");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::loggers::{DatabaseLogger, FileLogger};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingLogger {
        messages: Rc<RefCell<Vec<String>>>,
    }

    impl Logger for RecordingLogger {
        fn log(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_do_something_logs_exactly_once_with_the_fixed_message() {
        let logger = RecordingLogger::default();
        let messages = Rc::clone(&logger.messages);

        let service = Service::new(logger);
        service.do_something();

        let logged = messages.borrow();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0], "Операция выполнена");
    }

    #[test]
    fn test_repeated_calls_log_once_each() {
        let logger = RecordingLogger::default();
        let messages = Rc::clone(&logger.messages);

        let service = Service::new(logger);
        service.do_something();
        service.do_something();

        assert_eq!(messages.borrow().len(), 2);
    }

    #[test]
    fn test_any_backend_substitutes_for_the_capability() {
        Service::new(FileLogger).do_something();
        Service::new(DatabaseLogger).do_something();
    }
}
