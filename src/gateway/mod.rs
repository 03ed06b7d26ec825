// Remote data gateway: the adapter layer between handlers and the datastore.

pub mod document;
pub mod memory;
pub mod tabular;

use crate::core::config::{BackendConfig, BackendKind};
use crate::models::response::SurveyResponse;
use crate::models::user::User;
use anyhow::Result;
use thiserror::Error;

use document::DocumentStore;
use memory::MemoryStore;
use tabular::TabularStore;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// The backend unique constraint rejected an insert.
    #[error("User already exists")]
    Conflict,

    #[error("Backend returned status {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// The active datastore adapter.
///
/// One variant is selected at startup from `[backend] kind`; dispatch is a
/// closed enum so handlers stay oblivious to which backend is deployed.
pub enum Gateway {
    Tabular(TabularStore),
    Document(DocumentStore),
    Memory(MemoryStore),
}

impl Gateway {
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Ok(match config.kind {
            BackendKind::Tabular => Gateway::Tabular(TabularStore::new(config)?),
            BackendKind::Document => Gateway::Document(DocumentStore::new(config)?),
            BackendKind::Memory => Gateway::Memory(MemoryStore::new()),
        })
    }

    /// Insert a user, relying on the backend unique constraint on username.
    ///
    /// A constraint rejection surfaces as `GatewayError::Conflict`. There is
    /// deliberately no read-before-insert; concurrent registrations with the
    /// same username cannot both succeed.
    pub async fn create_user_if_absent(&self, user: &User) -> Result<(), GatewayError> {
        match self {
            Gateway::Tabular(store) => store.create_user(user).await,
            Gateway::Document(store) => store.create_user(user).await,
            Gateway::Memory(store) => store.create_user(user),
        }
    }

    pub async fn find_user(&self, username: &str) -> Result<Option<User>, GatewayError> {
        match self {
            Gateway::Tabular(store) => store.find_user(username).await,
            Gateway::Document(store) => store.find_user(username).await,
            Gateway::Memory(store) => Ok(store.find_user(username)),
        }
    }

    /// Append a survey response. Responses are never deduplicated by user.
    pub async fn create_response(&self, response: &SurveyResponse) -> Result<(), GatewayError> {
        match self {
            Gateway::Tabular(store) => store.create_response(response).await,
            Gateway::Document(store) => store.create_response(response).await,
            Gateway::Memory(store) => {
                store.create_response(response);
                Ok(())
            }
        }
    }

    /// List every stored response. Unbounded; there is no pagination.
    pub async fn list_responses(&self) -> Result<Vec<SurveyResponse>, GatewayError> {
        match self {
            Gateway::Tabular(store) => store.list_responses().await,
            Gateway::Document(store) => store.list_responses().await,
            Gateway::Memory(store) => Ok(store.list_responses()),
        }
    }

    /// Irreversible bulk delete of all responses.
    pub async fn delete_all_responses(&self) -> Result<(), GatewayError> {
        match self {
            Gateway::Tabular(store) => store.delete_all_responses().await,
            Gateway::Document(store) => store.delete_all_responses().await,
            Gateway::Memory(store) => {
                store.delete_all_responses();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BackendKind;

    fn backend_config(kind: BackendKind) -> BackendConfig {
        BackendConfig {
            kind,
            base_url: "http://localhost:54321".to_string(),
            api_key: "test-key".to_string(),
            users_table: "users".to_string(),
            responses_table: "responses".to_string(),
            database: "survey".to_string(),
        }
    }

    #[test]
    fn test_from_config_selects_adapter() {
        let gateway = Gateway::from_config(&backend_config(BackendKind::Tabular)).unwrap();
        assert!(matches!(gateway, Gateway::Tabular(_)));

        let gateway = Gateway::from_config(&backend_config(BackendKind::Document)).unwrap();
        assert!(matches!(gateway, Gateway::Document(_)));

        let gateway = Gateway::from_config(&backend_config(BackendKind::Memory)).unwrap();
        assert!(matches!(gateway, Gateway::Memory(_)));
    }
}
