use crate::derange::{derange, Pairing};
use crate::error::{DerangeError, RosterError};
use rand::Rng;

/// Ordered list of participants for a draw, owned by the caller.
///
/// One roster lives per game session: names get admitted one at a time
/// (trimmed, non-empty, unique ignoring case) and go to [`derange`] as the
/// givers once the list is complete. The roster holds no randomness and
/// nothing of a past draw; drawing twice from the same roster is two
/// independent draws.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a name. The raw input is trimmed first; empty input and
    /// names already present (compared case-insensitively) are rejected.
    /// Returns the name as stored.
    pub fn add(&mut self, raw: &str) -> Result<&str, RosterError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }

        let lowered = name.to_lowercase();
        if self.names.iter().any(|n| n.to_lowercase() == lowered) {
            return Err(RosterError::DuplicateName(name.to_owned()));
        }

        tracing::debug!(name, "participant added");
        self.names.push(name.to_owned());
        Ok(self.names[self.names.len() - 1].as_str())
    }

    /// Names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Numbered view for rendering the list, counting from 1.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (i + 1, n.as_str()))
    }

    /// Draws the pairs for the current roster.
    ///
    /// # Errors
    /// [`DerangeError::TooFewParticipants`] with fewer than two names,
    /// handed back untouched for the caller to announce.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Result<Vec<Pairing<String>>, DerangeError> {
        tracing::debug!(participants = self.names.len(), "drawing pairs");
        derange(rng, &self.names)
    }

    /// Like [`Roster::draw`] but seeded, so a draw can be replayed.
    #[cfg(feature = "seed_with")]
    pub fn draw_seeded(&self, seed: u64) -> Result<Vec<Pairing<String>>, DerangeError> {
        tracing::debug!(participants = self.names.len(), seed, "drawing pairs");
        crate::derange::derange_seeded(seed, &self.names)
    }
}
