pub mod answer_service;
pub mod export_service;
pub mod question_service;
pub mod resume_writer;
pub mod session_service;

pub use answer_service::AnswerService;
pub use export_service::{ExportReport, ExportService};
pub use question_service::QuestionService;
pub use resume_writer::ResumeWriter;
pub use session_service::{SessionInit, SessionService};
