use serde::Serialize;

/// Owners the viewer chose to display.
///
/// Always a subset of the allow-list, kept in allow-list order. The selection
/// narrows what is shown; it never changes computed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OwnerSelection {
    owners: Vec<String>,
}

impl OwnerSelection {
    /// Default selection: every allow-listed owner.
    pub fn all(allow_list: &[String]) -> Self {
        Self {
            owners: allow_list.to_vec(),
        }
    }

    /// Selection built from user input. Entries outside the allow-list are dropped.
    pub fn from_requested<I, S>(allow_list: &[String], requested: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested: Vec<String> = requested
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .collect();

        for unknown in requested.iter().filter(|r| !allow_list.contains(r)) {
            log::warn!("Ignoring owner outside the allow-list: {}", unknown);
        }

        let owners = allow_list
            .iter()
            .filter(|owner| requested.contains(owner))
            .cloned()
            .collect();
        Self { owners }
    }

    pub fn contains(&self, owner: &str) -> bool {
        self.owners.iter().any(|o| o == owner)
    }

    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
