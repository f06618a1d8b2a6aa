/// Deployment-specific identifiers for the backend project.
///
/// Values are taken as-is: a missing variable becomes an empty string and is
/// only reported through a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conf {
    pub appwrite_url: String,
    pub appwrite_project_id: String,
    pub appwrite_database_id: String,
    pub appwrite_collection_id: String,
    pub appwrite_bucket_id: String,
}

pub const APPWRITE_URL: &str = "APPWRITE_URL";
pub const APPWRITE_PROJECT_ID: &str = "APPWRITE_PROJECT_ID";
pub const APPWRITE_DATABASE_ID: &str = "APPWRITE_DATABASE_ID";
pub const APPWRITE_COLLECTION_ID: &str = "APPWRITE_COLLECTION_ID";
pub const APPWRITE_BUCKET_ID: &str = "APPWRITE_BUCKET_ID";

impl Conf {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key).unwrap_or_else(|| {
                tracing::warn!(key, "configuration variable is not set");
                String::new()
            })
        };

        Self {
            appwrite_url: read(APPWRITE_URL),
            appwrite_project_id: read(APPWRITE_PROJECT_ID),
            appwrite_database_id: read(APPWRITE_DATABASE_ID),
            appwrite_collection_id: read(APPWRITE_COLLECTION_ID),
            appwrite_bucket_id: read(APPWRITE_BUCKET_ID),
        }
    }

    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the variables captured when the crate was compiled. The browser
    /// has no process environment, so the wasm client uses this.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                APPWRITE_URL => option_env!("APPWRITE_URL"),
                APPWRITE_PROJECT_ID => option_env!("APPWRITE_PROJECT_ID"),
                APPWRITE_DATABASE_ID => option_env!("APPWRITE_DATABASE_ID"),
                APPWRITE_COLLECTION_ID => option_env!("APPWRITE_COLLECTION_ID"),
                APPWRITE_BUCKET_ID => option_env!("APPWRITE_BUCKET_ID"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_reads_each_key_separately() {
        let vars: HashMap<&str, &str> = [
            (APPWRITE_URL, "https://cloud.example.io/v1"),
            (APPWRITE_PROJECT_ID, "project"),
            (APPWRITE_DATABASE_ID, "db"),
            (APPWRITE_COLLECTION_ID, "posts"),
            (APPWRITE_BUCKET_ID, "images"),
        ]
        .into_iter()
        .collect();

        let conf = Conf::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(conf.appwrite_url, "https://cloud.example.io/v1");
        assert_eq!(conf.appwrite_project_id, "project");
        assert_eq!(conf.appwrite_database_id, "db");
        assert_eq!(conf.appwrite_collection_id, "posts");
        assert_eq!(conf.appwrite_bucket_id, "images");
    }

    #[test]
    fn test_missing_values_become_empty() {
        let conf = Conf::from_lookup(|key| {
            (key == APPWRITE_URL).then(|| "https://cloud.example.io/v1".to_string())
        });
        assert_eq!(conf.appwrite_url, "https://cloud.example.io/v1");
        assert_eq!(conf.appwrite_project_id, "");
        assert_eq!(conf.appwrite_bucket_id, "");
    }
}
