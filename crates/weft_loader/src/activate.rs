//! The activation capability and its default in-process implementation.

use std::collections::HashMap;

use crate::identity::UnitId;

/// Makes a compiled unit callable within the running process.
///
/// Activation is assumed not to be idempotent-safe, so the loader checks
/// its registry and activates each unit at most once per loader lifetime.
pub trait Activate {
    /// Activates the compiled artifact under the given unit identifier.
    fn activate(&mut self, id: &UnitId, artifact: &[u8]) -> Result<(), ActivateError>;
}

/// Activation of a compiled artifact failed.
///
/// Fatal to the requesting load; the unit is not registered as active.
#[derive(Debug, thiserror::Error)]
#[error("failed to activate unit {id}: {reason}")]
pub struct ActivateError {
    /// The unit identifier being activated.
    pub id: String,
    /// What went wrong.
    pub reason: String,
}

/// Default activator: an in-process table from unit id to compiled bytes.
///
/// Stands in for dynamic code loading. "Callable" here means the unit's
/// compiled representation is retrievable by id for the host runtime to
/// interpret.
#[derive(Debug, Default)]
pub struct UnitTable {
    units: HashMap<UnitId, Vec<u8>>,
}

impl UnitTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled bytes for an activated unit, if any.
    pub fn get(&self, id: &UnitId) -> Option<&[u8]> {
        self.units.get(id).map(Vec::as_slice)
    }

    /// Returns whether the unit has been activated.
    pub fn contains(&self, id: &UnitId) -> bool {
        self.units.contains_key(id)
    }

    /// Returns the number of activated units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns whether no units have been activated.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl Activate for UnitTable {
    fn activate(&mut self, id: &UnitId, artifact: &[u8]) -> Result<(), ActivateError> {
        self.units.insert(id.clone(), artifact.to_vec());
        Ok(())
    }
}
