//! # Built-in Element Rules
//!
//! One module per element family. Each exposes `register`, and
//! [`register_all`] calls them in a fixed order so the set of registered
//! kinds is explicit and testable.

mod column;
mod constraint;
mod dependency;
mod descriptor;
mod index;

use crate::error::RegistrationError;
use crate::registry::OpRegistryBuilder;

/// Register the rules of every built-in element kind.
///
/// # Errors
///
/// The first [`RegistrationError`]; later families are not registered.
pub fn register_all(builder: &mut OpRegistryBuilder) -> Result<(), RegistrationError> {
    descriptor::register(builder)?;
    column::register(builder)?;
    index::register(builder)?;
    constraint::register(builder)?;
    dependency::register(builder)?;
    Ok(())
}
