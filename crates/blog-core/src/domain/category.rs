use serde::{Deserialize, Serialize};

/// Category entity - groups posts under a named topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Validated fields for creating or overwriting a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    /// Overwrite name and description, keeping the id.
    pub fn apply(&mut self, input: CategoryInput) {
        self.name = input.name;
        self.description = input.description;
    }
}
