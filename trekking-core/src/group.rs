// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named groups of participants and their secret recipient assignment.
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::derange::{DerangeError, derange};

/// Column width the group name is padded to in the summary of a drawn group.
const SUMMARY_PAD: usize = 30;

/// A named group whose participants will each be assigned another participant as secret
/// recipient.
///
/// A group starts out "open": participants can be added and removed. Drawing the group freezes
/// the roster and assigns every participant a recipient. There is no way back from a drawn group
/// to an open one.
///
/// The assignment is kept parallel to the roster, `assignment[i]` is the recipient of
/// `participants[i]`. It is a derangement of the roster, so nobody is assigned to themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Group {
    name: String,
    participants: Vec<String>,
    assignment: Option<Vec<String>>,
}

impl Group {
    /// Returns a new, open group without any participants.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            participants: Vec::new(),
            assignment: None,
        }
    }

    /// Re-assembles a group from previously persisted parts.
    ///
    /// An assignment is only accepted if it is a permutation of the roster in which nobody is
    /// assigned to themselves.
    pub fn from_parts(
        name: impl Into<String>,
        participants: Vec<String>,
        assignment: Option<Vec<String>>,
    ) -> Result<Self, GroupError> {
        if let Some(assignment) = &assignment {
            let no_fixed_points = assignment.len() == participants.len()
                && participants
                    .iter()
                    .zip(assignment.iter())
                    .all(|(giver, recipient)| giver != recipient);

            // Everyone is the recipient of exactly one participant.
            let mut roster: Vec<&String> = participants.iter().collect();
            let mut recipients: Vec<&String> = assignment.iter().collect();
            roster.sort_unstable();
            recipients.sort_unstable();

            if !no_fixed_points || roster != recipients {
                return Err(GroupError::InconsistentAssignment);
            }
        }

        Ok(Self {
            name: name.into(),
            participants,
            assignment,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Participants in roster order.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Recipients parallel to [`Group::participants`], `None` while the group is open.
    pub fn assignment(&self) -> Option<&[String]> {
        self.assignment.as_deref()
    }

    pub fn is_drawn(&self) -> bool {
        self.assignment.is_some()
    }

    /// Appends a participant to the roster.
    pub fn add_participant(&mut self, participant: impl Into<String>) -> Result<(), GroupError> {
        if self.is_drawn() {
            return Err(GroupError::Drawn);
        }

        let participant = participant.into();
        if self.participants.contains(&participant) {
            return Err(GroupError::DuplicateParticipant(participant));
        }

        self.participants.push(participant);
        Ok(())
    }

    /// Removes a participant from the roster, keeping the order of everyone else.
    pub fn remove_participant(&mut self, participant: &str) -> Result<(), GroupError> {
        if self.is_drawn() {
            return Err(GroupError::Drawn);
        }

        let index = self
            .participants
            .iter()
            .position(|name| name == participant)
            .ok_or_else(|| GroupError::ParticipantNotFound(participant.to_string()))?;
        self.participants.remove(index);

        Ok(())
    }

    /// Freezes the roster and assigns every participant a recipient.
    ///
    /// The roster is shuffled first so the order in which participants joined has no influence
    /// on the outcome, then the assignment is derived as a derangement of the shuffled roster.
    /// The group stays untouched when drawing fails.
    pub fn draw<R>(&mut self, rng: &mut R) -> Result<(), GroupError>
    where
        R: Rng + ?Sized,
    {
        if self.is_drawn() {
            return Err(GroupError::AlreadyDrawn);
        }

        let mut participants = self.participants.clone();
        participants.shuffle(rng);
        let assignment = derange(&participants, rng)?;

        self.participants = participants;
        self.assignment = Some(assignment);

        Ok(())
    }

    /// Returns the recipient assigned to the given participant.
    pub fn recipient(&self, participant: &str) -> Result<&str, GroupError> {
        let assignment = self.assignment.as_ref().ok_or(GroupError::NotDrawn)?;

        self.participants
            .iter()
            .position(|name| name == participant)
            .map(|index| assignment[index].as_str())
            .ok_or_else(|| GroupError::ParticipantNotFound(participant.to_string()))
    }

    /// One-line, human-readable description of the group.
    pub fn summary(&self) -> String {
        if self.is_drawn() {
            format!("{:>width$} drawn", self.name, width = SUMMARY_PAD)
        } else {
            self.name.clone()
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    /// The roster of a drawn group can't be changed anymore.
    #[error("group was already drawn, participants can't be changed")]
    Drawn,

    #[error("group was already drawn")]
    AlreadyDrawn,

    #[error("group was not drawn yet")]
    NotDrawn,

    #[error("participant '{0}' is not part of this group")]
    ParticipantNotFound(String),

    #[error("participant '{0}' is already part of this group")]
    DuplicateParticipant(String),

    /// A persisted assignment does not fit the roster it was stored with.
    #[error("assignment does not match the participants of this group")]
    InconsistentAssignment,

    #[error(transparent)]
    Derange(#[from] DerangeError),
}
