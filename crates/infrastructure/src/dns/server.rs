use crate::dns::record_converter::RecordConverter;
use crate::dns::record_type_map::{DnsClassMapper, RecordTypeMapper};
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use pdsql_application::ports::{DnsHandler, Resolution};
use pdsql_domain::{DnsQuery, DomainError};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// What goes on the wire for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsePlan {
    pub response_code: ResponseCode,
    pub authoritative: bool,
    pub answers: Vec<Record>,
    pub additionals: Vec<Record>,
}

impl ResponsePlan {
    pub fn failure(response_code: ResponseCode) -> Self {
        Self {
            response_code,
            authoritative: false,
            answers: Vec::new(),
            additionals: Vec::new(),
        }
    }

    /// Maps a handler outcome to a response.
    ///
    /// A fall-through with nothing attached has no next handler to go to
    /// and becomes SERVFAIL, as does a store failure.
    pub fn from_outcome(outcome: Result<Resolution, DomainError>) -> Self {
        match outcome {
            Ok(Resolution::Answered(answer)) => Self {
                response_code: ResponseCode::NoError,
                authoritative: true,
                answers: RecordConverter::to_hickory_all(&answer.answers),
                additionals: answer
                    .additional
                    .iter()
                    .filter_map(RecordConverter::to_hickory)
                    .collect(),
            },
            Ok(Resolution::Fallthrough {
                additional: Some(soa),
            }) => match RecordConverter::to_hickory(&soa) {
                Some(record) => Self {
                    response_code: ResponseCode::NoError,
                    authoritative: true,
                    answers: Vec::new(),
                    additionals: vec![record],
                },
                None => Self::failure(ResponseCode::ServFail),
            },
            Ok(Resolution::Fallthrough { additional: None }) => {
                Self::failure(ResponseCode::ServFail)
            }
            Err(e) => {
                error!(error = %e, "Query resolution failed");
                Self::failure(ResponseCode::ServFail)
            }
        }
    }
}

pub struct DnsServerHandler {
    handler: Arc<dyn DnsHandler>,
}

impl DnsServerHandler {
    pub fn new(handler: Arc<dyn DnsHandler>) -> Self {
        Self { handler }
    }

    /// Resolves one question into a response plan. A class the store has
    /// no name for falls through without touching the handler.
    pub async fn resolve(&self, query: Option<DnsQuery>) -> ResponsePlan {
        let outcome = match query {
            Some(query) => self.handler.handle_query(&query).await,
            None => Ok(Resolution::Fallthrough { additional: None }),
        };
        ResponsePlan::from_outcome(outcome)
    }
}

impl Clone for DnsServerHandler {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_response(
                    request,
                    &mut response_handle,
                    ResponsePlan::failure(ResponseCode::FormErr),
                )
                .await;
            }
        };

        let query = &request_info.query;
        let name = query.name().to_string();
        let hickory_type = query.query_type();
        let hickory_class = query.query_class();

        info!(name = %name, record_type = ?hickory_type, client = %request.src().ip(), "DNS query received");

        let record_type = RecordTypeMapper::from_hickory(hickory_type);
        let domain_query = match DnsClassMapper::from_hickory(hickory_class) {
            Some(class) => Some(DnsQuery::new(name, record_type, class)),
            None => {
                warn!(class = ?hickory_class, "Unsupported query class");
                None
            }
        };

        let plan = self.resolve(domain_query).await;
        debug!(
            code = ?plan.response_code,
            answers = plan.answers.len(),
            additionals = plan.additionals.len(),
            "Sending response"
        );

        send_response(request, &mut response_handle, plan).await
    }
}

async fn send_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    plan: ResponsePlan,
) -> ResponseInfo {
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(plan.response_code);
    header.set_authoritative(plan.authoritative);

    let response = builder.build(
        header,
        plan.answers.iter(),
        &[],
        &[],
        plan.additionals.iter(),
    );

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send response");
            let mut header = Header::response_from_request(request.header());
            header.set_response_code(ResponseCode::ServFail);
            ResponseInfo::from(header)
        }
    }
}
