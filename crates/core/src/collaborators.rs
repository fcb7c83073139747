// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered set of users selected as collaborators, unique by user ID.

use crate::user::{User, UserId};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Collaborators in selection order.
///
/// Re-adding a user whose ID is already present is a no-op; the original
/// entry keeps its position. Removal preserves the order of the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollaboratorSet {
    users: IndexMap<UserId, User>,
}

impl CollaboratorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `user` unless its ID is already present. Returns true if added.
    pub fn insert(&mut self, user: User) -> bool {
        if self.users.contains_key(&user.id) {
            return false;
        }
        self.users.insert(user.id.clone(), user);
        true
    }

    /// Remove the entry with this ID. Returns true if one was removed.
    pub fn remove(&mut self, id: &UserId) -> bool {
        self.users.shift_remove(id).is_some()
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.users.contains_key(id)
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &UserId> {
        self.users.keys()
    }

    pub fn to_vec(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }
}

impl FromIterator<User> for CollaboratorSet {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let mut set = Self::new();
        for user in iter {
            set.insert(user);
        }
        set
    }
}

impl Extend<User> for CollaboratorSet {
    fn extend<I: IntoIterator<Item = User>>(&mut self, iter: I) {
        for user in iter {
            self.insert(user);
        }
    }
}

impl IntoIterator for CollaboratorSet {
    type Item = User;
    type IntoIter = indexmap::map::IntoValues<UserId, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.into_values()
    }
}

impl Serialize for CollaboratorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.users.values())
    }
}

impl<'de> Deserialize<'de> for CollaboratorSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let users = Vec::<User>::deserialize(deserializer)?;
        Ok(users.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "collaborators_tests.rs"]
mod tests;
