//! Package catalog
//!
//! The catalog is immutable for the lifetime of the process. It holds the
//! ordered level groups plus two auxiliary lists that live outside the
//! groups: the Google core services and the dangerous deny-list.

pub mod tables;

use serde::Serialize;

use crate::types::Classification;

/// One known Android package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PackageRecord {
    /// Reverse-domain package identifier, unique within a catalog
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    pub classification: Classification,
    pub description: &'static str,
    /// Never passed to uninstall when set
    pub dangerous: bool,
}

impl PackageRecord {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        classification: Classification,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            classification,
            description,
            dangerous: false,
        }
    }

    /// Mark the record as unsafe to remove
    pub const fn flagged(self) -> Self {
        Self {
            dangerous: true,
            ..self
        }
    }
}

/// Named, ordered group of packages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageGroup {
    pub name: &'static str,
    pub packages: Vec<PackageRecord>,
}

impl PackageGroup {
    pub fn new(name: &'static str, packages: impl Into<Vec<PackageRecord>>) -> Self {
        Self {
            name,
            packages: packages.into(),
        }
    }
}

/// Read-only package catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    groups: Vec<PackageGroup>,
    google: Vec<PackageRecord>,
    dangerous: Vec<PackageRecord>,
}

impl Catalog {
    /// Build a catalog from arbitrary groups and auxiliary lists
    pub fn new(
        groups: Vec<PackageGroup>,
        google: Vec<PackageRecord>,
        dangerous: Vec<PackageRecord>,
    ) -> Self {
        Self {
            groups,
            google,
            dangerous,
        }
    }

    /// The catalog shipped with the tool
    pub fn builtin() -> Self {
        let groups = tables::GROUPS
            .iter()
            .map(|(name, packages)| PackageGroup::new(*name, *packages))
            .collect();
        Self::new(groups, tables::GOOGLE_CORE.to_vec(), tables::DANGEROUS.to_vec())
    }

    pub fn groups(&self) -> &[PackageGroup] {
        &self.groups
    }

    /// Google core services handled by the de-google mode
    pub fn google(&self) -> &[PackageRecord] {
        &self.google
    }

    /// The deny-list
    pub fn dangerous(&self) -> &[PackageRecord] {
        &self.dangerous
    }

    /// Every record: groups first, then the Google list, then the deny-list
    pub fn iter(&self) -> impl Iterator<Item = &PackageRecord> {
        self.groups
            .iter()
            .flat_map(|group| group.packages.iter())
            .chain(self.google.iter())
            .chain(self.dangerous.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.groups().len(), 12);
        let grouped: usize = catalog.groups().iter().map(|g| g.packages.len()).sum();
        assert_eq!(grouped, 187);
        assert_eq!(catalog.google().len(), 5);
        assert_eq!(catalog.dangerous().len(), 10);
        assert_eq!(catalog.iter().count(), 202);
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut seen = HashSet::new();
        for record in catalog.iter() {
            assert!(seen.insert(record.id), "duplicate package id {}", record.id);
        }
    }

    #[test]
    fn test_group_order_is_preserved() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.groups().iter().map(|g| g.name).collect();
        assert_eq!(names.first(), Some(&"LEVEL 1: ABSOLUTE TRASH"));
        assert_eq!(names.last(), Some(&"LEVEL 12: OTHER CRUFT"));
        assert_eq!(catalog.groups()[0].packages[0].id, "com.miui.analytics");
    }

    #[test]
    fn test_dangerous_flags_follow_records_not_list() {
        let catalog = Catalog::builtin();
        let flagged: Vec<_> = catalog.dangerous().iter().filter(|r| r.dangerous).collect();
        assert_eq!(flagged.len(), 8);

        for id in ["com.qualcomm.qti.ims", "org.codeaurora.ims"] {
            let record = catalog.dangerous().iter().find(|r| r.id == id).unwrap();
            assert!(!record.dangerous, "{id} must keep its unset flag");
            assert_eq!(record.classification, Classification::Dangerous);
        }

        // Nothing outside the deny-list carries the flag
        assert!(catalog.groups().iter().flat_map(|g| &g.packages).all(|r| !r.dangerous));
        assert!(catalog.google().iter().all(|r| !r.dangerous));
    }

    #[test]
    fn test_google_core_contents() {
        let catalog = Catalog::builtin();
        let ids: Vec<_> = catalog.google().iter().map(|r| r.id).collect();
        assert!(ids.contains(&"com.android.vending"));
        assert!(ids.contains(&"com.google.android.gms"));
    }

    #[test]
    fn test_flagged_sets_only_danger_flag() {
        let record = PackageRecord::new("com.test.danger", "Danger", Classification::Dangerous, "boom");
        let flagged = record.flagged();
        assert!(flagged.dangerous);
        assert_eq!(flagged.id, record.id);
        assert_eq!(flagged.description, record.description);
    }
}
