//! Self-match-free random pairings for secret-friend draws.
//!
//! The crate shuffles a copy of the participant list with an unbiased
//! Fisher-Yates sweep and clears fixed points with a single circular
//! correction pass. The outcome is a derangement: everyone gives and
//! receives exactly once, and nobody draws themselves. Pairings are not
//! sampled uniformly from all possible derangements; see
//! [`AmigoDerange::derange`] for the caveat.

pub mod derange;
pub mod error;
pub mod fisher_yates;
pub mod roster;
pub mod uniform_index;

mod api;

pub use api::{AmigoDerange, AmigoShuffle};

pub mod prelude {
    pub use super::derange::derange;
    #[cfg(feature = "seed_with")]
    pub use super::derange::derange_seeded;
    pub use super::derange::Pairing;
    pub use super::error::{DerangeError, RosterError};
    pub use super::fisher_yates::fisher_yates;
    pub use super::roster::Roster;
    pub use super::{AmigoDerange, AmigoShuffle};
}
