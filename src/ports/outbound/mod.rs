/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the ClearlyDefined service, the file system and the console.
pub mod content_data_repository;
pub mod content_id_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use content_data_repository::ContentDataRepository;
pub use content_id_reader::{parse_id_lines, ContentIdReader, InputSource};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
