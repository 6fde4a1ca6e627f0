/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the formatters,
/// keeping the domain layer isolated.
mod check_request;
mod check_response;
mod output_format;

pub use check_request::CheckRequest;
pub use check_response::CheckResponse;
pub use output_format::OutputFormat;
