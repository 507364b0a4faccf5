pub mod factory;

pub use factory::{with_logging, DefaultSessionFactory, LoggingSessionFactory, Session, SessionFactory};
