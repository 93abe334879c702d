//! Sinkhole DNS Application Layer
pub mod ports;
pub mod use_cases;

pub use ports::AnswerSource;
pub use use_cases::AnswerQueryUseCase;
