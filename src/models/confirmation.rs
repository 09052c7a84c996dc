use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStatus {
    #[serde(rename = "Concluído")]
    Done,
    #[serde(rename = "Erro")]
    Failed,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum DispatchDetail {
    Message(String),
    Log(Vec<String>),
}

/// Result of one confirmation batch, serialized as `{status, detail}`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub status: DispatchStatus,
    pub detail: DispatchDetail,
}

impl DispatchOutcome {
    pub fn done(log: Vec<String>) -> Self {
        DispatchOutcome {
            status: DispatchStatus::Done,
            detail: DispatchDetail::Log(log),
        }
    }

    pub fn done_with_message(message: impl Into<String>) -> Self {
        DispatchOutcome {
            status: DispatchStatus::Done,
            detail: DispatchDetail::Message(message.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        DispatchOutcome {
            status: DispatchStatus::Failed,
            detail: DispatchDetail::Message(message.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status == DispatchStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_status_and_detail() {
        let done = DispatchOutcome::done(vec!["E-mail enviado para Bea.".to_string()]);
        assert_eq!(
            serde_json::to_value(&done).unwrap(),
            json!({"status": "Concluído", "detail": ["E-mail enviado para Bea."]})
        );

        let failed = DispatchOutcome::failed("boom");
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"status": "Erro", "detail": "boom"})
        );
        assert!(failed.is_failure());
    }
}
