// Middleware module - request logging and security headers.

pub mod request_logger;
pub mod security_headers;

pub use request_logger::request_logger_middleware;
pub use security_headers::add_security_headers;
