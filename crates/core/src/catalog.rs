//! Static code → name tables.
//!
//! The dataset stores weapon types as integer codes. The names ship as a
//! JSON asset compiled into the binary and parsed once on first use.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::Result;

const BUILTIN_CATALOG: &str = include_str!("../assets/weapon_types.json");

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::from_json(BUILTIN_CATALOG).unwrap_or_default());

/// Read-only mapping from dataset codes to display names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    weapon_types: Vec<String>,
}

impl Catalog {
    /// The catalog bundled with the binary.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse a catalog from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Display name of a weapon type code.
    pub fn weapon_name(&self, code: u32) -> String {
        self.weapon_types
            .get(code as usize)
            .cloned()
            .unwrap_or_else(|| format!("Unknown ({})", code))
    }

    /// Number of known weapon types.
    pub fn weapon_count(&self) -> usize {
        self.weapon_types.len()
    }
}
