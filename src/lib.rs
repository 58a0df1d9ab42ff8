//! Addition CGI program library.
//!
//! One request/response transformation: two numeric form fields in, an HTML
//! fragment with their sum (or an apology) out. The hosting web server owns
//! the socket and the CGI convention; this crate decodes the environment it
//! supplies, runs the handler, and frames the response for stdout.

pub mod cgi;
pub mod config;
pub mod error;
pub mod handler;
pub mod params;

pub use cgi::{CgiRequest, CgiResponse};
pub use config::Config;
pub use error::{CgiError, ConfigError, HandlerError};
pub use handler::{AdditionHandler, HandlerResponse};
pub use params::FormParams;
