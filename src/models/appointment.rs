use serde::Deserialize;

/// One row of a published appointments sheet. Column presence is not
/// enforced, so every field may be missing.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppointmentRow {
    #[serde(rename = "Nome Funcionario", default)]
    pub employee_name: Option<String>,
    #[serde(rename = "Nome Cliente", default)]
    pub client_name: Option<String>,
    #[serde(rename = "Data", default)]
    pub date: Option<String>,
    #[serde(rename = "Hora - Inicio", default)]
    pub start_time: Option<String>,
    #[serde(rename = "Procedimento", default)]
    pub procedure: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
}

impl AppointmentRow {
    pub fn employee(&self) -> &str {
        self.employee_name.as_deref().unwrap_or_default()
    }

    pub fn client(&self) -> &str {
        self.client_name.as_deref().unwrap_or_default()
    }

    pub fn start(&self) -> &str {
        self.start_time.as_deref().unwrap_or_default()
    }

    /// The procedure, if it holds anything besides whitespace.
    pub fn procedure(&self) -> Option<&str> {
        self.procedure.as_deref().filter(|p| !p.trim().is_empty())
    }

    pub fn is_pending(&self) -> bool {
        self.status.as_deref() == Some(crate::constants::STATUS_PENDING)
    }
}
