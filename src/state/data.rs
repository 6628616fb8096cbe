/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the store API and the UI layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier assigned to a product by the store
pub type ProductId = i64;

/// Represents a single product in the catalog
///
/// Read-only snapshot: a refetch replaces it wholesale.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique store ID
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// URI of the product image
    pub image: String,
}

/// Typed payload for `POST /products`, produced by validating a `ProductForm`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

/// Inputs of the add-product form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Id,
    Title,
    Price,
    Description,
    Category,
    Image,
}

impl FormField {
    /// All fields in display order
    pub const ALL: [FormField; 6] = [
        FormField::Id,
        FormField::Title,
        FormField::Price,
        FormField::Description,
        FormField::Category,
        FormField::Image,
    ];

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            FormField::Id => "ID",
            FormField::Title => "Title",
            FormField::Price => "Price",
            FormField::Description => "Description",
            FormField::Category => "Category",
            FormField::Image => "Image",
        }
    }
}

/// Why a form could not be turned into a `NewProduct`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(FormField),

    #[error("{} must be a number (got \"{value}\")", .field.label())]
    InvalidNumber { field: FormField, value: String },

    #[error("{} cannot be negative", .0.label())]
    Negative(FormField),
}

/// Raw text of the add-product inputs, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub id: String,
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl ProductForm {
    /// Current text of a field
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Title => &self.title,
            FormField::Price => &self.price,
            FormField::Description => &self.description,
            FormField::Category => &self.category,
            FormField::Image => &self.image,
        }
    }

    /// Replace the text of a field
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Id => &mut self.id,
            FormField::Title => &mut self.title,
            FormField::Price => &mut self.price,
            FormField::Description => &mut self.description,
            FormField::Category => &mut self.category,
            FormField::Image => &mut self.image,
        };
        *slot = value;
    }

    /// Validate the inputs and build the payload for `createProduct`
    ///
    /// `id` must be an integer, `title` non-blank and `price` a finite,
    /// non-negative number. The remaining fields are free text.
    pub fn validate(&self) -> Result<NewProduct, FormError> {
        let id = required(FormField::Id, &self.id)?;
        let id = id.parse::<ProductId>().map_err(|_| FormError::InvalidNumber {
            field: FormField::Id,
            value: id.to_string(),
        })?;

        let title = required(FormField::Title, &self.title)?;

        let price_text = required(FormField::Price, &self.price)?;
        let price = price_text
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| FormError::InvalidNumber {
                field: FormField::Price,
                value: price_text.to_string(),
            })?;
        if price < 0.0 {
            return Err(FormError::Negative(FormField::Price));
        }

        Ok(NewProduct {
            id,
            title: title.to_string(),
            price,
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            image: self.image.trim().to_string(),
        })
    }
}

fn required(field: FormField, value: &str) -> Result<&str, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(value)
    }
}

/// Price as shown in the grid: `$` followed by the shortest decimal form
pub fn price_label(price: f64) -> String {
    format!("${}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        ProductForm {
            id: "21".to_string(),
            title: " Canvas Tote ".to_string(),
            price: "12.5".to_string(),
            description: "Sturdy bag".to_string(),
            category: "bags".to_string(),
            image: "https://example.com/tote.png".to_string(),
        }
    }

    #[test]
    fn test_product_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "title": "A",
            "price": 9.99,
            "description": "first",
            "category": "misc",
            "image": "https://example.com/a.png",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.title, "A");
        assert_eq!(product.price, 9.99);
    }

    #[test]
    fn test_validate_builds_payload() {
        let payload = filled_form().validate().unwrap();
        assert_eq!(payload.id, 21);
        assert_eq!(payload.title, "Canvas Tote");
        assert_eq!(payload.price, 12.5);
        assert_eq!(payload.category, "bags");
    }

    #[test]
    fn test_validate_rejects_missing_title() {
        let mut form = filled_form();
        form.set(FormField::Title, "   ".to_string());
        assert_eq!(form.validate(), Err(FormError::Missing(FormField::Title)));
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        let mut form = filled_form();
        form.set(FormField::Id, "abc".to_string());
        assert!(matches!(
            form.validate(),
            Err(FormError::InvalidNumber { field: FormField::Id, .. })
        ));

        let mut form = filled_form();
        form.set(FormField::Price, "NaN".to_string());
        assert!(matches!(
            form.validate(),
            Err(FormError::InvalidNumber { field: FormField::Price, .. })
        ));

        let mut form = filled_form();
        form.set(FormField::Price, "-1".to_string());
        assert_eq!(form.validate(), Err(FormError::Negative(FormField::Price)));
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let mut form = filled_form();
        form.set(FormField::Description, String::new());
        form.set(FormField::Image, String::new());
        let payload = form.validate().unwrap();
        assert!(payload.description.is_empty());
        assert!(payload.image.is_empty());
    }

    #[test]
    fn test_set_and_value_round_through_every_field() {
        let mut form = ProductForm::default();
        for field in FormField::ALL {
            form.set(field, field.label().to_uppercase());
        }
        assert_eq!(form.value(FormField::Category), "CATEGORY");
        assert_eq!(form.value(FormField::Id), "ID");
    }

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(9.99), "$9.99");
        assert_eq!(price_label(5.0), "$5");
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::Missing(FormField::Title).to_string(), "Title is required");
        assert_eq!(
            FormError::InvalidNumber { field: FormField::Price, value: "x".to_string() }.to_string(),
            "Price must be a number (got \"x\")"
        );
    }
}
