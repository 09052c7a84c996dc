// published sheet exports (overridable through the environment)
pub const AGENDA_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/1UEXan3JXGPhRz2V92r-cPhIMMwf-Uyl4VTyElwgsH6w/export?format=csv&gid=1523497455";
pub const CONFIRMATION_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSu5Prkp10hWHI5bp1P1SsIXqvMHxy-V8FSusf4vdNfzDZuc2-tbeVEwnjhTx7Gi1HE9QwEG6GzVZYn/pub?gid=1523497455&single=true&output=csv";

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_TEMPLATE_PATH: &str = "email_template.html";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 80;

pub const STATUS_PENDING: &str = "Pendente";

// agenda document text
pub const AGENDA_TITLE: &str = "Agenda";
pub const NO_APPOINTMENTS: &str = "Nenhum agendamento para esta data.";
pub const INVALID_TIME: &str = "Hora Inválida";
pub const PDF_ERROR_PREFIX: &str = "Erro ao gerar o PDF: ";

// confirmation e-mails
pub const CONFIRMATION_SUBJECT: &str = "Confirmação de Agendamento";
pub const NO_PENDING: &str = "Nenhum agendamento pendente encontrado.";
pub const MISSING_CREDENTIALS: &str =
    "As variáveis de ambiente EMAIL_USER e EMAIL_PASS não foram configuradas.";
pub const CALENDAR_BASE_URL: &str = "https://www.google.com/calendar/render?action=TEMPLATE";

// template placeholders
pub const PH_CLIENT: &str = "{{cliente}}";
pub const PH_PROCEDURE: &str = "{{procedimento}}";
pub const PH_DATETIME: &str = "{{datahora}}";
pub const PH_CALENDAR_LINK: &str = "{{calendar_link}}";

pub const HOME_BODY: &str = "<h1>API da Clínica no ar!</h1><p>Use os endpoints /send_confirmation ou /generate_agenda_pdf.</p>";
