use crate::config::Settings;
use crate::errors::StartupError;
use log::{info, warn};
use std::sync::Arc;
use user_list::InMemoryPageSource;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub users: Arc<InMemoryPageSource>,
}

impl AppState {
    /// Builds the state, loading the configured user collection
    pub fn new(settings: Settings) -> Result<Self, StartupError> {
        let users = match &settings.users_file {
            Some(path) => {
                let users = InMemoryPageSource::from_json_file(path).map_err(|source| {
                    StartupError::Users {
                        path: path.clone(),
                        source,
                    }
                })?;
                info!("Loaded {} users from {}", users.len(), path);
                users
            }
            None => {
                warn!("No users file configured, serving an empty user list");
                InMemoryPageSource::default()
            }
        };

        Ok(Self::with_users(settings, users))
    }

    pub fn with_users(settings: Settings, users: InMemoryPageSource) -> Self {
        Self {
            settings: Arc::new(settings),
            users: Arc::new(users),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn users_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn settings_for(file: &NamedTempFile) -> Settings {
        Settings {
            users_file: Some(file.path().to_string_lossy().into_owned()),
            ..Settings::default()
        }
    }

    #[test]
    fn test_app_state_without_users_file() {
        let state = AppState::new(Settings::default()).unwrap();
        assert!(state.users.is_empty());
    }

    #[test]
    fn test_app_state_loads_users_file() {
        let file = users_file(
            r#"[
                {"id": 1, "username": "user1", "email": "user1@mail.com", "image": null},
                {"id": 2, "username": "user2", "email": "user2@mail.com"}
            ]"#,
        );

        let state = AppState::new(settings_for(&file)).unwrap();
        assert_eq!(state.users.len(), 2);
    }

    #[test]
    fn test_app_state_rejects_duplicate_ids() {
        let file = users_file(
            r#"[
                {"id": 1, "username": "user1", "email": "user1@mail.com"},
                {"id": 1, "username": "user2", "email": "user2@mail.com"}
            ]"#,
        );

        let err = AppState::new(settings_for(&file)).err().unwrap();
        assert!(err.to_string().contains("Duplicate user id 1"));
    }

    #[test]
    fn test_app_state_missing_file() {
        let settings = Settings {
            users_file: Some("/nonexistent/users.json".to_string()),
            ..Settings::default()
        };
        assert!(AppState::new(settings).is_err());
    }

    #[test]
    fn test_app_state_clone() {
        let state = AppState::with_users(Settings::default(), InMemoryPageSource::default());
        let state2 = state.clone();

        // After cloning, both instances should point to the same data
        assert_eq!(Arc::as_ptr(&state.settings), Arc::as_ptr(&state2.settings));
        assert_eq!(Arc::as_ptr(&state.users), Arc::as_ptr(&state2.users));
    }
}
