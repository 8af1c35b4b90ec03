use std::collections::HashMap;
use std::sync::Arc;

use bytes::BufMut;
use futures::TryStreamExt;
use serde::Serialize;
use warp::multipart::{FormData, Part};
use warp::{Rejection, Reply};

use formpost::config::Config;
use formpost::email::OutboundEmail;
use formpost::form::{CareerForm, ContactForm};
use formpost::smtp::Mailer;
use formpost::spool::Spool;

use super::errors;

#[derive(Serialize)]
struct SuccessReply {
    success: bool,
    message: String,
}

fn success(message: &str) -> impl Reply {
    warp::reply::json(&SuccessReply {
        success: true,
        message: message.to_string(),
    })
}

pub async fn contact(
    form: ContactForm,
    config: Arc<Config>,
    mailer: Arc<dyn Mailer>,
) -> Result<impl Reply, Rejection> {
    form.validate().map_err(errors::reject)?;

    log::info!("Contact submission from {} <{}>", form.name, form.email);

    let email = OutboundEmail {
        sender: config.sender.clone(),
        recipient: config.recipient.clone(),
        reply_to: Some(form.email.clone()),
        subject: format!("New Contact Form Submission: {}", form.subject),
        body: form.body_text(),
        attachments: Vec::new(),
    };

    mailer.send(&email).await.map_err(errors::reject)?;

    Ok(success("Message sent successfully!"))
}

pub async fn career(
    form: FormData,
    config: Arc<Config>,
    mailer: Arc<dyn Mailer>,
) -> Result<impl Reply, Rejection> {
    let (fields, resume) = collect_parts(form).await.map_err(errors::reject)?;

    let career = CareerForm::from_fields(&fields);
    career.validate().map_err(errors::reject)?;

    let (file_name, data) = match resume {
        Some((name, data)) if !data.is_empty() => (name, data),
        _ => return Err(errors::reject(formpost::Error::MissingAttachment)),
    };

    log::info!(
        "Career submission from {} <{}> for {} ({} byte resume)",
        career.name,
        career.email,
        career.position,
        data.len()
    );

    let spool = Spool::new(config.upload_dir.clone());
    let stored = spool.save(&file_name, &data).await.map_err(errors::reject)?;

    let email = OutboundEmail {
        sender: config.sender.clone(),
        recipient: config.recipient.clone(),
        reply_to: Some(career.email.clone()),
        subject: format!("New Job Application: {}", career.position),
        body: career.body_text(),
        attachments: vec![stored.clone()],
    };

    // Clean up the spooled file whether or not the send succeeded
    let result = mailer.send(&email).await;
    spool.remove(&stored).await;

    result.map_err(errors::reject)?;

    Ok(success("Application submitted successfully!"))
}

/// Diagnostic route: sends a fixed message to the configured
/// recipient and reports the relay status.
pub async fn email_test(
    config: Arc<Config>,
    mailer: Arc<dyn Mailer>,
) -> Result<impl Reply, Rejection> {
    let email = OutboundEmail {
        sender: config.sender.clone(),
        recipient: config.recipient.clone(),
        reply_to: None,
        subject: "Formpost test message".to_string(),
        body: "This is a test message from the Formpost relay.".to_string(),
        attachments: Vec::new(),
    };

    mailer.send(&email).await.map_err(errors::reject)?;

    Ok(success("Test message sent!"))
}

/// Split a multipart form into its text fields and the resume file.
///
/// Single pass over the stream: each part's bytes must be drained
/// before the next part is pulled.
async fn collect_parts(
    mut form: FormData,
) -> Result<(HashMap<String, String>, Option<(String, Vec<u8>)>), formpost::Error> {
    let mut fields = HashMap::new();
    let mut resume = None;

    while let Some(part) = form
        .try_next()
        .await
        .map_err(|e| formpost::Error::Multipart(e.to_string()))?
    {
        let name = part.name().to_string();
        let file_name = part.filename().map(String::from);
        let data = part_bytes(part).await?;

        if name == "resume" {
            resume = Some((file_name.unwrap_or_else(|| "resume".to_string()), data));
        } else {
            fields.insert(name, String::from_utf8_lossy(&data).into_owned());
        }
    }

    Ok((fields, resume))
}

async fn part_bytes(part: Part) -> Result<Vec<u8>, formpost::Error> {
    part.stream()
        .try_fold(Vec::new(), |mut buf, data| {
            buf.put(data);
            async move { Ok(buf) }
        })
        .await
        .map_err(|e| formpost::Error::Multipart(e.to_string()))
}
