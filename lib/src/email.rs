//! Generic outbound message and attachment types.
//! Built fresh for each request and handed to a `Mailer`;
//! nothing here survives the request.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub sender: String,
    pub recipient: String,
    /// Submitter's address, so replies go back to them
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
    pub attachments: Vec<StoredAttachment>,
}

/// A file that has been spooled to disk for one request.
/// `name` is the client-supplied file name; `path` is where the
/// spool put it; `mime` is guessed from the name.
#[derive(Debug, Clone)]
pub struct StoredAttachment {
    pub name: String,
    pub path: PathBuf,
    pub mime: String,
}
