/// All possible Formpost library errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A required form field was missing or empty
    MissingField(String),
    /// A career submission arrived without a resume file
    MissingAttachment,
    /// Multipart body could not be read
    Multipart(String),
    /// A sender or recipient address could not be parsed
    BadAddress(String),
    /// Outbound message could not be assembled
    Message(String),
    /// Upload spool I/O failure
    Spool(String),
    /// SMTP relay failure
    Transport(String),
    /// Configuration could not be loaded
    Config(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::MissingField(ref name) => write!(f, "Missing required field: {}", name),
            Error::MissingAttachment => write!(f, "A resume file is required"),
            Error::Multipart(ref msg) => write!(f, "Invalid multipart body: {}", msg),
            Error::BadAddress(ref addr) => write!(f, "Invalid email address: {}", addr),
            Error::Message(ref msg) => write!(f, "Message build: {}", msg),
            Error::Spool(ref msg) => write!(f, "Spool: {}", msg),
            Error::Transport(ref msg) => write!(f, "Transport: {}", msg),
            Error::Config(ref msg) => write!(f, "Config: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// True for errors caused by the client's request rather than
    /// the relay or the host.
    pub fn is_client_error(&self) -> bool {
        matches!(
            *self,
            Error::MissingField(_)
                | Error::MissingAttachment
                | Error::Multipart(_)
                | Error::BadAddress(_)
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Spool(err.to_string())
    }
}

impl From<lettre::error::Error> for Error {
    fn from(err: lettre::error::Error) -> Self {
        Error::Message(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for Error {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}
