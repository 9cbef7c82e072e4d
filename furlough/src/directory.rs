use std::fs;
use std::path::Path;

use crate::errors::DirectoryError;
use crate::leave::User;

/// The user list, fetched once at startup from a static JSON resource.
///
/// Lookups are linear scans over canonical string ids; the directory is
/// small, immutable reference data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Fetches the directory from the JSON user array at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Fetch`] if the resource cannot be read and
    /// [`DirectoryError::Parse`] if it is not a JSON user array.
    pub fn fetch(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let raw = fs::read_to_string(path)?;
        let users = serde_json::from_str(&raw)?;
        Ok(Self { users })
    }

    /// Fetches the directory, falling back to an empty one on failure.
    ///
    /// This is the startup policy: the failure is logged and the application
    /// continues degraded, with no selectable users rather than an error.
    pub fn fetch_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::fetch(path) {
            Ok(directory) => directory,
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "could not fetch users, continuing with an empty directory"
                );
                Self::default()
            }
        }
    }

    /// Looks up a user by its canonical id.
    pub fn resolve(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// All known users, in resource order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl From<Vec<User>> for UserDirectory {
    fn from(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_mixed_form_ids_from_the_resource() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("users.json");
        // Ids arrive as strings or numbers depending on who produced the file.
        fs::write(
            &path,
            r#"[{"id": "u1", "name": "Ada"}, {"id": 7, "name": "Grace"}]"#,
        )?;

        let directory = UserDirectory::fetch(&path)?;
        assert_eq!(directory.users().len(), 2);
        assert_eq!(directory.resolve("u1").map(|u| u.name.as_str()), Some("Ada"));
        assert_eq!(directory.resolve("7").map(|u| u.name.as_str()), Some("Grace"));
        assert_eq!(directory.resolve("u2"), None);
        Ok(())
    }

    #[test]
    fn a_missing_resource_is_a_fetch_error() {
        let error = UserDirectory::fetch("/definitely/not/there/users.json").unwrap_err();
        assert!(matches!(error, DirectoryError::Fetch(_)));
    }

    #[test]
    fn a_malformed_resource_is_a_parse_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("users.json");
        fs::write(&path, "<html>oops</html>")?;

        assert!(matches!(
            UserDirectory::fetch(&path).unwrap_err(),
            DirectoryError::Parse(_)
        ));
        Ok(())
    }

    #[test]
    fn startup_fallback_is_an_empty_directory() {
        let directory = UserDirectory::fetch_or_empty("/definitely/not/there/users.json");
        assert!(directory.is_empty());
    }
}
