/// Mock implementations for testing
mod mock_content_data_repository;
mod mock_content_id_reader;
mod mock_progress_reporter;

pub use mock_content_data_repository::MockContentDataRepository;
pub use mock_content_id_reader::MockContentIdReader;
pub use mock_progress_reporter::MockProgressReporter;
