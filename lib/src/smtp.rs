//! Outbound mail transport.
//!
//! A thin wrapper over lettre's async SMTP client. One send per
//! request, no retry and no queueing: a relay failure maps straight
//! to a server error on the HTTP side.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::Config;
use crate::email::OutboundEmail;
use crate::error::Error;

/// Sends one outbound message. Behind a trait so controllers can be
/// exercised with a stub transport in tests.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, email: &OutboundEmail) -> Result<(), Error>;
}

/// SMTP relay client with static credentials (STARTTLS).
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_pass.clone(),
            ))
            .build();

        Ok(Self { transport })
    }

    /// Map our transient email type onto a wire message. Attachment
    /// content is read back from the spool path here.
    async fn build_message(email: &OutboundEmail) -> Result<Message, Error> {
        let sender: Mailbox = email
            .sender
            .parse()
            .map_err(|_| Error::BadAddress(email.sender.clone()))?;
        let recipient: Mailbox = email
            .recipient
            .parse()
            .map_err(|_| Error::BadAddress(email.recipient.clone()))?;

        let mut builder = Message::builder()
            .from(sender)
            .to(recipient)
            .subject(email.subject.clone());

        if let Some(ref reply_to) = email.reply_to {
            let mailbox: Mailbox = reply_to
                .parse()
                .map_err(|_| Error::BadAddress(reply_to.clone()))?;
            builder = builder.reply_to(mailbox);
        }

        if email.attachments.is_empty() {
            let message = builder
                .header(ContentType::TEXT_PLAIN)
                .body(email.body.clone())?;
            return Ok(message);
        }

        let mut multipart = MultiPart::mixed().singlepart(SinglePart::plain(email.body.clone()));

        for attachment in &email.attachments {
            let data = tokio::fs::read(&attachment.path).await?;
            let content_type = ContentType::parse(&attachment.mime)
                .map_err(|e| Error::Message(e.to_string()))?;

            multipart =
                multipart.singlepart(Attachment::new(attachment.name.clone()).body(data, content_type));
        }

        Ok(builder.multipart(multipart)?)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), Error> {
        let message = Self::build_message(email).await?;

        self.transport.send(message).await.map_err(|e| {
            log::error!("Error sending email to {}: {}", email.recipient, e);
            Error::from(e)
        })?;

        log::info!("Relayed message to {}: {}", email.recipient, email.subject);

        Ok(())
    }
}
