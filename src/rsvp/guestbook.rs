use crate::rsvp::form::GuestSubmission;

/// In-memory RSVP list, newest first. Lives as long as the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Guestbook {
    entries: Vec<GuestSubmission>,
}

impl Guestbook {
    /// `seed` is shown in the given order, below every later submission.
    pub fn with_seed(seed: Vec<GuestSubmission>) -> Self {
        Self { entries: seed }
    }

    pub fn prepend(&mut self, entry: GuestSubmission) {
        self.entries.insert(0, entry);
    }

    /// Display order: most recent first.
    pub fn entries(&self) -> &[GuestSubmission] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&GuestSubmission> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
