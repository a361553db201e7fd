//! CLI command implementations.

pub mod demo;
pub mod script;
pub mod search;

use crate::error::CliError;
use libris_core::{Catalog, Requester};

/// Validates the requester fields entered at the boundary.
///
/// Both fields must contain something other than whitespace.
pub fn requester(id: &str, name: &str) -> Result<Requester, CliError> {
    if id.trim().is_empty() || name.trim().is_empty() {
        return Err(CliError::MissingRequester);
    }
    Ok(Requester::new(id.trim(), name.trim()))
}

/// Opens the catalog a command works against.
pub fn open_catalog(no_samples: bool) -> Catalog {
    if no_samples {
        Catalog::new(Vec::new())
    } else {
        Catalog::with_samples()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_requester_rejected() {
        assert!(matches!(requester("", "Abebe"), Err(CliError::MissingRequester)));
        assert!(matches!(requester("u1", "  "), Err(CliError::MissingRequester)));
    }

    #[test]
    fn requester_fields_trimmed() {
        let r = requester(" u1 ", "Abebe ").unwrap();
        assert_eq!(r.id, "u1");
        assert_eq!(r.name, "Abebe");
    }

    #[test]
    fn catalog_seeding() {
        assert_eq!(open_catalog(false).len(), 3);
        assert!(open_catalog(true).is_empty());
    }
}
