// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Project and server catalog plus keyboard layout helpers.
//!
//! The catalog is ordered and membership checks are case-exact: a label
//! is valid only if the user could have pressed the button for it.

const GTA5RP_SERVERS: &[&str] = &[
    "Downtown",
    "Burton",
    "Strawberry",
    "Rockford",
    "Vinewood",
    "Alta",
    "Blackberry",
    "Del Perro",
    "Insquad",
    "Davis",
    "Sunrise",
    "Harmony",
    "Rainbow",
    "Redwood",
    "Richman",
    "Hawick",
    "Eclipse",
    "Grapeseed",
    "La Mesa",
    "Murrieta",
    "Vespucci",
];

const MAJESTIC_SERVERS: &[&str] = &[
    "New York",
    "San Diego",
    "Detroit",
    "Los Angeles",
    "Miami",
    "Washington",
    "Dallas",
    "Las Vegas",
    "Chicago",
    "Atlanta",
    "San Francisco",
    "Houston",
    "Seattle",
    "Boston",
];

/// One project and its server list.
#[derive(Debug, Clone)]
struct ProjectEntry {
    key: String,
    servers: Vec<String>,
}

/// The ordered set of projects and servers the wizard offers.
#[derive(Debug, Clone)]
pub struct OptionCatalog {
    projects: Vec<ProjectEntry>,
}

impl OptionCatalog {
    /// The built-in catalog: GTA5RP and Majestic.
    pub fn builtin() -> Self {
        Self {
            projects: vec![
                ProjectEntry {
                    key: "GTA5RP".to_string(),
                    servers: GTA5RP_SERVERS.iter().map(|s| s.to_string()).collect(),
                },
                ProjectEntry {
                    key: "Majestic".to_string(),
                    servers: MAJESTIC_SERVERS.iter().map(|s| s.to_string()).collect(),
                },
            ],
        }
    }

    /// Project keys in catalog order.
    pub fn project_keys(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.key.as_str())
    }

    pub fn is_project(&self, key: &str) -> bool {
        self.projects.iter().any(|p| p.key == key)
    }

    /// Servers of a project, in catalog order.
    pub fn servers(&self, project: &str) -> Option<&[String]> {
        self.projects
            .iter()
            .find(|p| p.key == project)
            .map(|p| p.servers.as_slice())
    }

    /// True when `server` belongs to `project`. Servers of other projects
    /// do not count.
    pub fn is_server_of(&self, project: &str, server: &str) -> bool {
        self.servers(project)
            .is_some_and(|servers| servers.iter().any(|s| s == server))
    }
}

/// Lays labels out two per row; an odd count leaves a final single-button
/// row.
pub fn paired_rows(items: &[String]) -> Vec<Vec<String>> {
    items.chunks(2).map(|pair| pair.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_both_projects() {
        let catalog = OptionCatalog::builtin();
        let keys: Vec<&str> = catalog.project_keys().collect();
        assert_eq!(keys, vec!["GTA5RP", "Majestic"]);
        assert_eq!(catalog.servers("GTA5RP").unwrap().len(), 21);
        assert_eq!(catalog.servers("Majestic").unwrap().len(), 14);
    }

    #[test]
    fn membership_is_case_exact() {
        let catalog = OptionCatalog::builtin();
        assert!(catalog.is_project("GTA5RP"));
        assert!(!catalog.is_project("gta5rp"));
        assert!(catalog.is_server_of("GTA5RP", "Downtown"));
        assert!(!catalog.is_server_of("GTA5RP", "downtown"));
    }

    #[test]
    fn servers_do_not_leak_across_projects() {
        let catalog = OptionCatalog::builtin();
        assert!(catalog.is_server_of("Majestic", "New York"));
        assert!(!catalog.is_server_of("GTA5RP", "New York"));
        assert!(!catalog.is_server_of("Majestic", "Downtown"));
    }

    #[test]
    fn unknown_project_has_no_servers() {
        let catalog = OptionCatalog::builtin();
        assert!(catalog.servers("Altteria").is_none());
        assert!(!catalog.is_server_of("Altteria", "Downtown"));
    }

    #[test]
    fn paired_rows_handles_odd_and_even_counts() {
        let four: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(paired_rows(&four), vec![vec!["a", "b"], vec!["c", "d"]]);

        let three: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let rows = paired_rows(&three);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["c"]);

        assert!(paired_rows(&[]).is_empty());
    }
}
