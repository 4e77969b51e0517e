use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, immutable identity of an element, assigned once at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "element_{}", self.0.simple())
    }
}

pub fn generate_id() -> ElementId {
    ElementId(Uuid::new_v4())
}
