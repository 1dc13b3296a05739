use crate::foundation::error::InvitationError;

/// Whether the guest will come.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Attendance {
    #[default]
    Attending,
    NotAttending,
}

impl std::str::FromStr for Attendance {
    type Err = InvitationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attending" | "hadir" | "yes" => Ok(Self::Attending),
            "notattending" | "not-attending" | "not_attending" | "tidak hadir" | "no" => {
                Ok(Self::NotAttending)
            }
            other => Err(InvitationError::validation(format!(
                "unknown attendance '{other}'"
            ))),
        }
    }
}

/// One accepted RSVP, displayed in the guestbook.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GuestSubmission {
    pub display_name: String,
    pub message: String,
    #[serde(default)]
    pub attendance: Attendance,
}

/// Required field left blank on submit.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RsvpError {
    #[error("display name is required")]
    MissingName,
    #[error("message is required")]
    MissingMessage,
}

impl From<RsvpError> for InvitationError {
    fn from(value: RsvpError) -> Self {
        InvitationError::validation(value.to_string())
    }
}

/// Editable form fields. `attendance` unset means Attending.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RsvpForm {
    pub display_name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<Attendance>,
}

impl RsvpForm {
    pub fn new(
        display_name: impl Into<String>,
        message: impl Into<String>,
        attendance: Option<Attendance>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            message: message.into(),
            attendance,
        }
    }

    /// Check required fields without touching the form. Blank means empty, but accepted text is
    /// kept as entered.
    pub fn validate(&self) -> Result<GuestSubmission, RsvpError> {
        if self.display_name.trim().is_empty() {
            return Err(RsvpError::MissingName);
        }
        if self.message.trim().is_empty() {
            return Err(RsvpError::MissingMessage);
        }
        Ok(GuestSubmission {
            display_name: self.display_name.clone(),
            message: self.message.clone(),
            attendance: self.attendance.unwrap_or_default(),
        })
    }

    /// Validate, then clear the fields on success. A rejected form keeps its contents.
    pub fn submit(&mut self) -> Result<GuestSubmission, RsvpError> {
        let accepted = self.validate()?;
        self.reset();
        Ok(accepted)
    }

    pub fn reset(&mut self) {
        *self = Self {
            attendance: Some(Attendance::Attending),
            ..Self::default()
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rsvp/form.rs"]
mod tests;
