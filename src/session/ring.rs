//! Participant registry and the ring the current speaker rotates over.
//!
//! Construction happens in two phases: every participant is first registered
//! with the *names* of its neighbors, then a resolution pass turns those names
//! into [`ParticipantId`] handles. Once built, a [`ParticipantRing`] is
//! immutable and neighbor lookups are plain index reads.

use std::collections::HashMap;

use crate::error::{SessionError, SessionResult};

/// Name used when a session is started without any participants.
pub const DEFAULT_PARTICIPANT: &str = "Anonymous";

/// Handle to a participant.
///
/// Handles are only meaningful for the ring that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticipantId(usize);

/// A participant reference, either by name or by handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantRef<'a> {
    Name(&'a str),
    Handle(ParticipantId),
}

impl<'a> From<&'a str> for ParticipantRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl From<ParticipantId> for ParticipantRef<'_> {
    fn from(id: ParticipantId) -> Self {
        Self::Handle(id)
    }
}

/// A chat participant with resolved neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    left: ParticipantId,
    right: ParticipantId,
}

impl Participant {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn left(&self) -> ParticipantId {
        self.left
    }

    pub const fn right(&self) -> ParticipantId {
        self.right
    }
}

/// Participants registered by name, neighbors not yet resolved.
#[derive(Debug, Default)]
struct Registry {
    names: Vec<String>,
    neighbors: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Registers `name`; re-registering an existing name replaces its
    /// neighbors but keeps its original position.
    fn register(&mut self, name: &str, left: &str, right: &str) {
        let neighbors = (left.to_string(), right.to_string());

        if let Some(&slot) = self.index.get(name) {
            self.neighbors[slot] = neighbors;
            return;
        }

        self.index.insert(name.to_string(), self.names.len());
        self.names.push(name.to_string());
        self.neighbors.push(neighbors);
    }

    fn lookup(&self, name: &str) -> SessionResult<ParticipantId> {
        self.index
            .get(name)
            .copied()
            .map(ParticipantId)
            .ok_or_else(|| SessionError::UnknownParticipant(name.to_string()))
    }

    fn resolve(self) -> SessionResult<ParticipantRing> {
        let participants = self
            .names
            .iter()
            .zip(&self.neighbors)
            .map(|(name, (left, right))| {
                Ok(Participant {
                    name: name.clone(),
                    left: self.lookup(left)?,
                    right: self.lookup(right)?,
                })
            })
            .collect::<SessionResult<Vec<_>>>()?;

        Ok(ParticipantRing {
            participants,
            index: self.index,
        })
    }
}

/// The circular seating order of a session's participants.
#[derive(Debug, Clone)]
pub struct ParticipantRing {
    participants: Vec<Participant>,
    index: HashMap<String, usize>,
}

impl ParticipantRing {
    /// Builds a ring from an ordered list of names.
    ///
    /// The participant at position `i` sits between positions `i - 1` and
    /// `i + 1`, wrapping at both ends. A name listed more than once is a
    /// single participant whose neighbors come from its last occurrence.
    /// An empty list yields a ring holding only [`DEFAULT_PARTICIPANT`].
    pub fn build<S: AsRef<str>>(names: &[S]) -> SessionResult<Self> {
        let names: Vec<&str> = if names.is_empty() {
            vec![DEFAULT_PARTICIPANT]
        } else {
            names.iter().map(AsRef::as_ref).collect()
        };

        let count = names.len();
        let mut registry = Registry::default();
        for (i, name) in names.iter().enumerate() {
            let left = names[(i + count - 1) % count];
            let right = names[(i + 1) % count];
            registry.register(name, left, right);
        }

        registry.resolve()
    }

    /// Resolves a name or handle to a handle of this ring.
    pub fn resolve<'a>(
        &self,
        participant: impl Into<ParticipantRef<'a>>,
    ) -> SessionResult<ParticipantId> {
        match participant.into() {
            ParticipantRef::Handle(id) if id.0 < self.participants.len() => Ok(id),
            ParticipantRef::Handle(id) => {
                Err(SessionError::UnknownParticipant(format!("#{}", id.0)))
            }
            ParticipantRef::Name(name) => self
                .index
                .get(name)
                .copied()
                .map(ParticipantId)
                .ok_or_else(|| SessionError::UnknownParticipant(name.to_string())),
        }
    }

    /// Looks up a handle issued by this ring.
    ///
    /// The same holds for [`name`](Self::name), [`left`](Self::left) and
    /// [`right`](Self::right).
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a larger ring. Check foreign handles with
    /// [`resolve`](Self::resolve) first.
    pub fn participant(&self, id: ParticipantId) -> &Participant {
        &self.participants[id.0]
    }

    pub fn name(&self, id: ParticipantId) -> &str {
        self.participant(id).name()
    }

    pub fn left(&self, id: ParticipantId) -> ParticipantId {
        self.participant(id).left
    }

    pub fn right(&self, id: ParticipantId) -> ParticipantId {
        self.participant(id).right
    }

    /// The participant who speaks first: the first one registered.
    pub const fn first(&self) -> ParticipantId {
        ParticipantId(0)
    }

    /// All participants in first-registration order.
    pub fn all_participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.participants.iter().map(Participant::name)
    }

    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> + use<> {
        (0..self.participants.len()).map(ParticipantId)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Always `false`: a built ring holds at least one participant.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
