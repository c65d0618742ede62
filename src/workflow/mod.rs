pub mod survey_flow;
pub mod survey_state;
pub mod survey_view;

pub use survey_flow::SurveyFlow;
pub use survey_state::{Choice, Phase, SurveyEvent, SurveyState};
pub use survey_view::{render, Control, View};
