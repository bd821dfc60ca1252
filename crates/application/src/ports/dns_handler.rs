use async_trait::async_trait;
use pdsql_domain::{DnsQuery, DomainError, ResourceRecord};

/// Records produced for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    pub answers: Vec<ResourceRecord>,
    /// Synthesized SOA for the additional section.
    pub additional: Option<ResourceRecord>,
}

impl Answer {
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Answered(Answer),
    /// Nothing to answer with; the next handler should try. May still carry
    /// an SOA for the additional section.
    Fallthrough { additional: Option<ResourceRecord> },
}

impl Resolution {
    pub fn is_answered(&self) -> bool {
        matches!(self, Resolution::Answered(_))
    }

    pub fn answers(&self) -> &[ResourceRecord] {
        match self {
            Resolution::Answered(answer) => &answer.answers,
            Resolution::Fallthrough { .. } => &[],
        }
    }

    pub fn additional(&self) -> Option<&ResourceRecord> {
        match self {
            Resolution::Answered(answer) => answer.additional.as_ref(),
            Resolution::Fallthrough { additional } => additional.as_ref(),
        }
    }
}

impl From<Answer> for Resolution {
    fn from(answer: Answer) -> Self {
        if answer.is_empty() {
            Resolution::Fallthrough {
                additional: answer.additional,
            }
        } else {
            Resolution::Answered(answer)
        }
    }
}

#[async_trait]
pub trait DnsHandler: Send + Sync {
    /// Handler name used in logs.
    fn name(&self) -> &'static str;

    async fn handle_query(&self, query: &DnsQuery) -> Result<Resolution, DomainError>;
}
