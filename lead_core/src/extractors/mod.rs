pub mod payload;

pub use payload::SubmissionPayload;
