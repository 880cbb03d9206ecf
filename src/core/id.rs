//! Identifier generation for newly created entities

use uuid::Uuid;

/// Generates unique string identifiers for stored entities
///
/// A single generator instance is shared by both resources via the app state.
/// Identifiers are 32 lowercase hex characters (UUID v4, simple format), so
/// every call is collision-free without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator;

impl IdGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self
    }

    /// Produce a fresh identifier, never one already in use
    pub fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
