pub mod feedback_client;

pub use feedback_client::FeedbackClient;
