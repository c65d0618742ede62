pub mod answer;
pub mod export;
pub mod question;
pub mod session;

pub use answer::Answer;
pub use export::{ExportFormat, ExportRow};
pub use question::{validate_question_list, Question, QuestionKind};
pub use session::SessionId;
