use sinkhole_dns_application::use_cases::AnswerQueryUseCase;
use sinkhole_dns_domain::Config;
use sinkhole_dns_infrastructure::dns::{DnsServerHandler, StaticAnswerSource};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let answer_source = Arc::new(StaticAnswerSource::new(
            config.response.address,
            config.response.ttl,
        ));
        let use_case = Arc::new(AnswerQueryUseCase::new(answer_source));

        info!("DNS services initialized");

        Self {
            handler: DnsServerHandler::new(use_case),
        }
    }
}
