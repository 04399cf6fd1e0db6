use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{normalize_name, Error, Resource, ResourceKind, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            created_at: Utc::now(),
        }
    }

    /// Key used to enforce one account per address.
    pub fn email_key(&self) -> String {
        normalize_name(&self.email)
    }
}

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::User;
    const UNIQUE_FIELD: Option<&'static str> = Some("email");

    type Create = NewUser;
    type Update = UserPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_payload(payload: NewUser) -> Result<Self> {
        let name = Error::required("name", payload.name)?;
        let email = Error::required("email", payload.email)?;

        Ok(User::new(name, email))
    }

    fn validate_patch(patch: &UserPatch) -> Result<()> {
        Error::reject_blank("name", patch.name.as_ref())?;
        Error::reject_blank("email", patch.email.as_ref())
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(email) = patch.email {
            self.email = email.trim().to_string();
        }
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.email_key())
    }
}
