//! @ai:module:intent Identify benchmarked container variants and their duplicate handling
//! @ai:module:layer domain
//! @ai:module:public_api ContainerKind, DuplicatePolicy
//! @ai:module:stateless true

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// @ai:intent Open set of container variant names
/// @ai:context new kinds are added by registering a factory, not by editing this type
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerKind(Cow<'static, str>);

impl ContainerKind {
    pub const LINKED_LIST: ContainerKind = ContainerKind(Cow::Borrowed("linked_list"));
    pub const DEQUE: ContainerKind = ContainerKind(Cow::Borrowed("deque"));
    pub const QUEUE: ContainerKind = ContainerKind(Cow::Borrowed("queue"));
    pub const STACK: ContainerKind = ContainerKind(Cow::Borrowed("stack"));
    pub const HASH_SET: ContainerKind = ContainerKind(Cow::Borrowed("hash_set"));
    pub const BTREE_SET: ContainerKind = ContainerKind(Cow::Borrowed("btree_set"));

    /// @ai:intent Create a kind from any name
    /// @ai:effects pure
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// @ai:intent What an insert does when the lexeme is already stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Insert is a no-op returning false.
    #[default]
    Skip,
    /// Insert always appends another copy.
    Allow,
}

impl DuplicatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::Skip => "skip",
            DuplicatePolicy::Allow => "allow",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(DuplicatePolicy::Skip),
            "allow" => Ok(DuplicatePolicy::Allow),
            other => Err(Error::InvalidConfig(format!(
                "duplicate policy must be 'skip' or 'allow', got '{}'",
                other
            ))),
        }
    }
}
