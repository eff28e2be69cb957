//! `.gitignore` maintenance.

/// Content of `.gitignore` after ensuring `entry` is listed.
///
/// Returns `None` when an identical line is already present.
pub fn with_entry(existing: Option<&str>, entry: &str) -> Option<String> {
    match existing {
        None => Some(format!("{}\n", entry)),
        Some(content) if content.lines().any(|line| line.trim() == entry) => None,
        Some(content) if content.is_empty() || content.ends_with('\n') => {
            Some(format!("{}{}\n", content, entry))
        }
        Some(content) => Some(format!("{}\n{}\n", content, entry)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = "config/localdev-config.json";

    #[test]
    fn creates_file_when_missing() {
        assert_eq!(with_entry(None, ENTRY).as_deref(), Some("config/localdev-config.json\n"));
    }

    #[test]
    fn appends_on_new_line() {
        assert_eq!(
            with_entry(Some(".build/"), ENTRY).as_deref(),
            Some(".build/\nconfig/localdev-config.json\n")
        );
        assert_eq!(
            with_entry(Some(".build/\n"), ENTRY).as_deref(),
            Some(".build/\nconfig/localdev-config.json\n")
        );
    }

    #[test]
    fn leaves_existing_entry_alone() {
        assert_eq!(with_entry(Some("a\nconfig/localdev-config.json\n"), ENTRY), None);
    }
}
