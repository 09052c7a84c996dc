use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct AgendaRequest {
    pub data: Option<String>,
}
