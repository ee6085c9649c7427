//! Name <-> identifier registry of the supported functionals.

use crate::bimap::BiMap;
use crate::error::{XcError, XcResult};
use crate::functional::Functional;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Result<Registry, String>> = OnceLock::new();

/// Bijection between display names and [`Functional`] identifiers.
#[derive(Debug, Clone)]
pub struct Registry {
    map: BiMap<&'static str, Functional>,
}

impl Registry {
    pub fn from_table(table: &[(&'static str, Functional)]) -> XcResult<Registry> {
        let map = BiMap::from_pairs(table.iter().copied())?;
        Ok(Registry { map })
    }

    /// Table of every [`Functional`] under its display name.
    fn load() -> Result<Registry, String> {
        let table: Vec<(&'static str, Functional)> =
            Functional::ALL.iter().map(|f| (f.as_str(), *f)).collect();

        Registry::from_table(&table).map_err(|e| {
            log::error!("functional registry cannot be built: {}", e);
            match e {
                XcError::DuplicateValue(what) => what,
                other => other.to_string(),
            }
        })
    }

    /// Process-wide registry, built on first use. A table that is not a
    /// bijection is reported as `DuplicateValue` on every call.
    pub fn try_global() -> XcResult<&'static Registry> {
        GLOBAL
            .get_or_init(Registry::load)
            .as_ref()
            .map_err(|what| XcError::DuplicateValue(what.clone()))
    }

    /// Same as [`Registry::try_global`].
    ///
    /// # Panics
    ///
    /// If the registry cannot be built.
    pub fn global() -> &'static Registry {
        match Registry::try_global() {
            Ok(reg) => reg,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn lookup_by_name(&self, name: &str) -> XcResult<Functional> {
        self.map
            .value(name)
            .copied()
            .ok_or_else(|| XcError::NotFound(format!("'{}'", name)))
    }

    pub fn lookup_by_id(&self, id: Functional) -> XcResult<&'static str> {
        self.map
            .key(&id)
            .copied()
            .ok_or_else(|| XcError::NotFound(format!("{:?}", id)))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn contains_id(&self, id: Functional) -> bool {
        self.map.contains_value(&id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Functional)> + '_ {
        self.map.iter().map(|(k, v)| (*k, *v))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.map.iter().map(|(k, _)| *k).collect()
    }
}
