pub mod response;
pub mod submission;

pub use response::{select_response, ResponseMode, SubmitResponse};
pub use submission::{Submission, DEFAULT_SOURCE, LOG_COLUMNS};
