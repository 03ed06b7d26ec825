use crate::gateway::GatewayError;
use crate::models::response::SurveyResponse;
use crate::models::user::User;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Mutex;

/// In-process adapter for local development and tests.
///
/// Users live in a DashMap keyed by username; the entry API gives the same
/// atomic insert-if-absent the remote backends get from their unique
/// constraint. Responses are an append-only list.
pub struct MemoryStore {
    users: DashMap<String, User>,
    responses: Mutex<Vec<SurveyResponse>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            responses: Mutex::new(Vec::new()),
        }
    }

    pub fn create_user(&self, user: &User) -> Result<(), GatewayError> {
        match self.users.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(GatewayError::Conflict),
            Entry::Vacant(entry) => {
                entry.insert(user.clone());
                Ok(())
            }
        }
    }

    pub fn find_user(&self, username: &str) -> Option<User> {
        self.users.get(username).map(|user| user.clone())
    }

    pub fn create_response(&self, response: &SurveyResponse) {
        self.responses
            .lock()
            .expect("responses lock poisoned")
            .push(response.clone());
    }

    pub fn list_responses(&self) -> Vec<SurveyResponse> {
        self.responses
            .lock()
            .expect("responses lock poisoned")
            .clone()
    }

    pub fn delete_all_responses(&self) {
        self.responses
            .lock()
            .expect("responses lock poisoned")
            .clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
