//! Concrete collaborators plugged into the domain ports.

pub mod estonian;
