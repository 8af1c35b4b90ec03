use std::collections::HashMap;

use serde::Deserialize;

use crate::error::Error;

/// Checks that a required field is present and non-empty after trimming.
/// Presence only: no format validation of any kind.
fn required(name: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        Err(Error::MissingField(name.to_string()))
    } else {
        Ok(())
    }
}

/// Contact form submission, deserialized from a JSON body.
///
/// All fields default to empty so that a missing key reaches
/// `validate` and produces a missing-field error instead of a
/// deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub subject: String,
    /// Optional
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), Error> {
        required("name", &self.name)?;
        required("email", &self.email)?;
        required("subject", &self.subject)?;
        required("mobile", &self.mobile)
    }

    /// Plain-text body for the relayed message.
    pub fn body_text(&self) -> String {
        format!(
            "You received a new message from:\n\n\
             Name: {}\nEmail: {}\nMobile No.: {}\n\n\
             Message:\n{}",
            self.name, self.email, self.mobile, self.message
        )
    }
}

/// Career (job application) form submission, collected from
/// multipart text parts.
#[derive(Debug, Clone, Default)]
pub struct CareerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: String,
    pub qualification: String,
    pub passing_year: String,
    /// Optional
    pub message: String,
}

impl CareerForm {
    /// Fill from the text fields of a multipart form. Unknown field
    /// names are ignored.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let mut form = Self::default();

        for (key, value) in fields {
            match key.as_str() {
                "name" => form.name = value.clone(),
                "email" => form.email = value.clone(),
                "phone" => form.phone = value.clone(),
                "position" => form.position = value.clone(),
                "experience" => form.experience = value.clone(),
                "qualification" => form.qualification = value.clone(),
                "passingYear" => form.passing_year = value.clone(),
                "message" => form.message = value.clone(),
                _ => (),
            }
        }

        form
    }

    pub fn validate(&self) -> Result<(), Error> {
        required("name", &self.name)?;
        required("email", &self.email)?;
        required("phone", &self.phone)?;
        required("position", &self.position)?;
        required("experience", &self.experience)?;
        required("qualification", &self.qualification)?;
        required("passingYear", &self.passing_year)
    }

    pub fn body_text(&self) -> String {
        format!(
            "You received a new job application:\n\n\
             Name: {}\nEmail: {}\nPhone: {}\nPosition: {}\n\
             Experience: {}\nQualification: {}\nPassing Year: {}\n\n\
             Message:\n{}",
            self.name,
            self.email,
            self.phone,
            self.position,
            self.experience,
            self.qualification,
            self.passing_year,
            self.message
        )
    }
}
