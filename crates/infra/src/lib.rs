//! Infrastructure layer: concrete collaborators behind the domain service traits.

pub mod projects;
