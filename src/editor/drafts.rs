//! Category Drafts
//!
//! Unsaved category and sub-category entries as edited in the bulk editor.

use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::helpers::slugify;

/// An editable entry of the bulk editor
pub trait Draft: Validate + Default + Clone + Serialize + Send + Sync + 'static {
    /// Collection the batch is created in (`POST /{COLLECTION}/bulk`)
    const COLLECTION: &'static str;

    fn name(&self) -> &str;

    fn slug(&self) -> &str;

    fn name_mut(&mut self) -> &mut String;

    fn slug_mut(&mut self) -> &mut String;

    /// Set the name and keep an untouched slug in step with it.
    ///
    /// The slug follows the name while it is empty or still equal to the
    /// slug derived from the previous name.
    fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        let follows = self.slug().is_empty() || self.slug() == slugify(self.name());
        if follows {
            *self.slug_mut() = slugify(&name);
        }
        *self.name_mut() = name;
    }

    fn set_slug(&mut self, slug: impl Into<String>) {
        *self.slug_mut() = slug.into();
    }

    /// Whether entries are created under a parent category
    const NEEDS_PARENT: bool = false;

    fn parent_id(&self) -> Option<u64> {
        None
    }

    fn set_parent_id(&mut self, _parent: Option<u64>) {}
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// New category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "not_blank", message = "Slug is required"))]
    pub slug: String,
}

impl Draft for CategoryDraft {
    const COLLECTION: &'static str = "categories";

    fn name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    fn slug_mut(&mut self) -> &mut String {
        &mut self.slug
    }
}

/// New sub-category under an existing category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryDraft {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "not_blank", message = "Slug is required"))]
    pub slug: String,

    /// Parent category
    #[validate(required(message = "Parent category is required"))]
    pub category_id: Option<u64>,
}

impl Draft for SubCategoryDraft {
    const COLLECTION: &'static str = "sub-categories";

    fn name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    fn slug_mut(&mut self) -> &mut String {
        &mut self.slug
    }

    const NEEDS_PARENT: bool = true;

    fn parent_id(&self) -> Option<u64> {
        self.category_id
    }

    fn set_parent_id(&mut self, parent: Option<u64>) {
        self.category_id = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_follows_name_until_edited() {
        let mut draft = CategoryDraft::default();
        draft.set_name("Wall Art");
        assert_eq!(draft.slug, "wall-art");
        draft.set_name("Wall Art Prints");
        assert_eq!(draft.slug, "wall-art-prints");

        draft.set_slug("prints");
        draft.set_name("Posters");
        assert_eq!(draft.slug, "prints");
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let draft = CategoryDraft {
            name: "   ".into(),
            slug: "x".into(),
        };
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_sub_category_requires_parent() {
        let draft = SubCategoryDraft {
            name: "Mugs".into(),
            slug: "mugs".into(),
            category_id: None,
        };
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("category_id"));

        let draft = SubCategoryDraft {
            category_id: Some(3),
            ..draft
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_serializes_camel_case() {
        let draft = SubCategoryDraft {
            name: "Mugs".into(),
            slug: "mugs".into(),
            category_id: Some(3),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["categoryId"], 3);
    }

    #[test]
    fn test_parent_id_only_on_sub_categories() {
        let mut draft = SubCategoryDraft::default();
        draft.set_parent_id(Some(7));
        assert_eq!(draft.parent_id(), Some(7));
        assert!(SubCategoryDraft::NEEDS_PARENT);

        let mut category = CategoryDraft::default();
        category.set_parent_id(Some(7));
        assert_eq!(category.parent_id(), None);
        assert!(!CategoryDraft::NEEDS_PARENT);
    }
}
