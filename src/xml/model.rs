//! XML boundary data objects. Every field is an `Option` because values are
//! injected from input data at runtime; which ones must actually be present
//! is declared by the field tags and enforced by the validation pass.

use crate::domain::boundary::{Boundary, FieldSpec, Tag, TypeSpec};
use crate::utils::constraint::{self, ConstraintViolations, Validate};
use crate::xml::{XmlObject, XML_OBJECT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "user")]
pub struct User {
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            email,
        }
    }
}

impl Boundary for User {
    fn spec() -> TypeSpec {
        TypeSpec {
            name: "User",
            module_path: module_path!(),
            implements: &[XML_OBJECT],
            fields: &[
                FieldSpec {
                    name: "id",
                    tags: &[Tag::NotNull],
                },
                FieldSpec {
                    name: "name",
                    tags: &[Tag::NotBlank],
                },
                FieldSpec {
                    name: "email",
                    tags: &[Tag::Nullable],
                },
            ],
        }
    }
}

impl XmlObject for User {}

impl Validate for User {
    fn validate(&self) -> ConstraintViolations {
        let mut violations = ConstraintViolations::new();
        constraint::require(&mut violations, "id", &self.id);
        constraint::require_non_blank(&mut violations, "name", &self.name);
        violations
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "product")]
pub struct Product {
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
}

impl Product {
    pub fn new(
        product_id: impl Into<String>,
        description: Option<String>,
        image_url: Option<String>,
        price: f64,
        created_by: Option<User>,
    ) -> Self {
        Self {
            product_id: Some(product_id.into()),
            description,
            image_url,
            price: Some(price),
            created_by,
        }
    }
}

impl Boundary for Product {
    fn spec() -> TypeSpec {
        TypeSpec {
            name: "Product",
            module_path: module_path!(),
            implements: &[XML_OBJECT],
            fields: &[
                FieldSpec {
                    name: "product_id",
                    tags: &[Tag::NotNull],
                },
                FieldSpec {
                    name: "description",
                    tags: &[Tag::Nullable],
                },
                FieldSpec {
                    name: "image_url",
                    tags: &[Tag::Nullable],
                },
                FieldSpec {
                    name: "price",
                    tags: &[Tag::NotNull],
                },
                FieldSpec {
                    name: "created_by",
                    tags: &[Tag::Nullable],
                },
            ],
        }
    }
}

impl XmlObject for Product {}

impl Validate for Product {
    fn validate(&self) -> ConstraintViolations {
        let mut violations = ConstraintViolations::new();
        constraint::require(&mut violations, "product_id", &self.product_id);
        constraint::require(&mut violations, "price", &self.price);
        // A product without a creator is fine; a present creator is
        // validated recursively.
        constraint::validate_nested(&mut violations, "created_by", &self.created_by);
        violations
    }
}
