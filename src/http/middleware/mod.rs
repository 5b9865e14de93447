/// Middleware modules

pub mod request_log;
