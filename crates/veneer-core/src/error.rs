use std::panic::Location;

use thiserror::Error;

/// Usage-precondition violations surfaced at call time.
#[derive(Debug, Error)]
pub enum ContextError {
    /// A component asked for a local that no ancestor provided. Carries
    /// the call site that tripped it, for diagnosability.
    #[error("<{component} /> is missing a parent <{provider} /> component (required at {location})")]
    MissingContext {
        component: String,
        provider: &'static str,
        location: &'static Location<'static>,
    },
}

impl ContextError {
    /// Call site where the missing requirement was observed.
    pub fn location(&self) -> &'static Location<'static> {
        match self {
            ContextError::MissingContext { location, .. } => location,
        }
    }
}
