use thiserror::Error;

/// Failures inside the agenda and confirmation pipelines.
///
/// The `Display` text is what ends up in the error PDF and in the `Erro`
/// detail of a dispatch, so keep it readable.
#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("falha ao buscar a planilha: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("falha ao ler a planilha: {0}")]
    Csv(#[from] csv::Error),

    #[error("data inválida '{0}', use o formato dd/mm/aaaa")]
    InvalidDate(String),

    #[error("data/hora inválida '{0}', use o formato dd/mm/aaaa HH:MM")]
    InvalidStart(String),

    #[error("falha ao ler o template de e-mail: {0}")]
    Template(#[from] std::io::Error),

    #[error("falha ao enviar e-mail: {0}")]
    Mail(String),

    #[error("falha ao montar o PDF: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, ClinicError>;
