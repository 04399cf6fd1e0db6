use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{normalize_name, Error, Resource, ResourceKind, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
}

impl Category {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            created_at: Utc::now(),
        }
    }

    /// "Trabalho" and "  TRABALHO " name the same category.
    pub fn name_key(&self) -> String {
        normalize_name(&self.name)
    }
}

impl Resource for Category {
    const KIND: ResourceKind = ResourceKind::Category;
    const UNIQUE_FIELD: Option<&'static str> = Some("name");

    type Create = NewCategory;
    type Update = CategoryPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_payload(payload: NewCategory) -> Result<Self> {
        Ok(Category::new(Error::required("name", payload.name)?))
    }

    fn validate_patch(patch: &CategoryPatch) -> Result<()> {
        Error::reject_blank("name", patch.name.as_ref())
    }

    fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.name_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_name_key() {
        let a = Category::new("Trabalho".to_string());
        let b = Category::new("  TRABALHO ".to_string());
        assert_eq!(a.name_key(), b.name_key());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_category_requires_name() {
        assert!(Category::from_payload(NewCategory { name: None }).is_err());

        let category = Category::from_payload(NewCategory {
            name: Some(" Estudo ".to_string()),
        })
        .unwrap();
        assert_eq!(category.name, "Estudo");
    }
}
