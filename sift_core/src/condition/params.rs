//! Process-wide parameter identity cache
//!
//! Every condition built for a record type references the same canonical
//! [`Parameter`] instance. Translators combining independently built
//! condition trees rely on this identity, so entries live for the life of
//! the process and are never evicted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use lazy_static::lazy_static;

use super::expr::Parameter;

lazy_static! {
    static ref PARAMETER_TABLE: Mutex<HashMap<&'static str, Arc<Parameter>>> =
        Mutex::new(HashMap::new());
}

/// Canonical bound variable for a record type.
///
/// The first call for a type creates the parameter; every later call from
/// any thread returns the same `Arc`.
pub fn parameter_for<T: 'static>() -> Arc<Parameter> {
    let key = std::any::type_name::<T>();
    let mut table = PARAMETER_TABLE.lock().unwrap();
    Arc::clone(
        table
            .entry(key)
            .or_insert_with(|| Arc::new(Parameter::new(short_type_name(key)))),
    )
}

/// Last path segment of a fully qualified type name, lowercased for use as
/// a variable name.
fn short_type_name(full: &str) -> String {
    full.rsplit("::")
        .next()
        .unwrap_or(full)
        .to_ascii_lowercase()
}
