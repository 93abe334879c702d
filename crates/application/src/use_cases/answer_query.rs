use crate::ports::AnswerSource;
use sinkhole_dns_domain::Message;
use std::sync::Arc;
use tracing::debug;

/// Builds the response message for a decoded query.
///
/// The response keeps the query's ID, flags and question section. Only
/// the QR bit is flipped; answers come from the configured source, one
/// lookup per question, in question order. Authority and additional
/// records from the query are never echoed back.
pub struct AnswerQueryUseCase {
    answer_source: Arc<dyn AnswerSource>,
}

impl AnswerQueryUseCase {
    pub fn new(answer_source: Arc<dyn AnswerSource>) -> Self {
        Self { answer_source }
    }

    pub async fn execute(&self, query: Message) -> Message {
        let mut response = query;
        response.header.flags.set_response(true);

        response.answers.clear();
        for question in &response.questions {
            let answers = self.answer_source.answers_for(question).await;
            response.answers.extend(answers);
        }

        response.authority.clear();
        response.additional.clear();

        debug!(
            id = response.header.id,
            questions = response.questions.len(),
            answers = response.answers.len(),
            "Response assembled"
        );

        response
    }
}
