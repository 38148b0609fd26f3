//! Home-directory and environment-variable expansion for typed paths.

use std::borrow::Cow;

/// Expands a leading `~` and `$VAR`/`${VAR}` references in `input`.
///
/// Unknown variables are left untouched so the typed text stays visible.
pub fn expand_path(input: &str) -> Cow<'_, str> {
    let home_dir = dirs::home_dir().map(|path| path.to_string_lossy().into_owned());

    shellexpand::full_with_context_no_errors(input, || home_dir.as_deref(), |name: &str| {
        std::env::var(name).ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_leaves_plain_path_unchanged() {
        // Arrange & Act
        let expanded = expand_path("/var/log/syslog");

        // Assert
        assert_eq!(expanded, "/var/log/syslog");
    }

    #[test]
    fn test_expand_path_expands_home() {
        // Arrange
        let Some(home) = dirs::home_dir() else {
            return;
        };

        // Act
        let expanded = expand_path("~/notes");

        // Assert
        assert_eq!(expanded, format!("{}/notes", home.to_string_lossy()));
    }

    #[test]
    fn test_expand_path_expands_known_variable() {
        // Arrange
        let Ok(path_variable) = std::env::var("PATH") else {
            return;
        };

        // Act
        let expanded = expand_path("$PATH");

        // Assert
        assert_eq!(expanded, path_variable);
    }

    #[test]
    fn test_expand_path_keeps_unknown_variable() {
        // Arrange & Act
        let expanded = expand_path("/tmp/$PATHPICK_SURELY_UNSET_VARIABLE/x");

        // Assert
        assert_eq!(expanded, "/tmp/$PATHPICK_SURELY_UNSET_VARIABLE/x");
    }
}
