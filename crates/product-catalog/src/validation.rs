//! # Product Form Validation
//!
//! [`ProductForm`] holds the raw text of every input of the add/edit form. [`validate`] checks
//! it against the field rules and returns one message per failing field:
//!
//! | field | rules |
//! |-------|-------|
//! | `name` | required |
//! | `imageUrl` | required, absolute `http`/`https`/`ftp` URL with a host |
//! | `count` | required, number, non-negative, whole, at most `u32::MAX` |
//! | `weight` | required |
//! | `size.width` | required, number, greater than 0 |
//! | `size.height` | required, number, greater than 0 |
//!
//! Validation is pure; failing forms never reach a store.

use crate::model::{Comment, Product, ProductDraft, Size};
use reqwest::Url;
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::str::FromStr;

/// An input of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    ImageUrl,
    Count,
    Weight,
    Width,
    Height,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::ImageUrl,
        Field::Count,
        Field::Weight,
        Field::Width,
        Field::Height,
    ];

    /// The form key of the field (`size.width` for nested values).
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::ImageUrl => "imageUrl",
            Field::Count => "count",
            Field::Weight => "weight",
            Field::Width => "size.width",
            Field::Height => "size.height",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown form field: {s}"))
    }
}

/// Failing fields and their messages, in form order. Empty when the form is valid.
pub type FieldErrors = BTreeMap<Field, String>;

/// Raw values of the product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub image_url: String,
    pub count: String,
    pub weight: String,
    pub width: String,
    pub height: String,
}

impl ProductForm {
    /// Pre-fills the form with the current values of `product`.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            count: product.count.to_string(),
            weight: product.weight.clone(),
            width: product.size.width.to_string(),
            height: product.size.height.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::ImageUrl => &self.image_url,
            Field::Count => &self.count,
            Field::Weight => &self.weight,
            Field::Width => &self.width,
            Field::Height => &self.height,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::ImageUrl => &mut self.image_url,
            Field::Count => &mut self.count,
            Field::Weight => &mut self.weight,
            Field::Width => &mut self.width,
            Field::Height => &mut self.height,
        };
        *slot = value.into();
    }

    pub fn validate(&self) -> FieldErrors {
        validate(self)
    }

    /// Converts a valid form into a typed draft with the given embedded comments.
    pub fn to_draft(&self, comments: Vec<Comment>) -> Result<ProductDraft, FieldErrors> {
        let errors = validate(self);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ProductDraft {
            name: self.name.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            count: number(&self.count).unwrap_or_default() as u32,
            size: Size {
                width: number(&self.width).unwrap_or_default(),
                height: number(&self.height).unwrap_or_default(),
            },
            weight: self.weight.trim().to_string(),
            comments,
        })
    }
}

/// Checks every field of `form`.
pub fn validate(form: &ProductForm) -> FieldErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| check(field, form.get(field)).map(|message| (field, message)))
        .collect()
}

fn check(field: Field, raw: &str) -> Option<String> {
    let value = raw.trim();
    let message = match field {
        Field::Name if value.is_empty() => "Product name is required",
        Field::ImageUrl if value.is_empty() => "Image URL is required",
        Field::ImageUrl if !is_valid_url(value) => "Must be a valid URL",
        Field::Weight if value.is_empty() => "Weight is required",
        Field::Count => return check_count(value),
        Field::Width => return check_dimension("Width", value),
        Field::Height => return check_dimension("Height", value),
        _ => return None,
    };
    Some(message.to_string())
}

fn check_count(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Count is required".to_string());
    }
    let message = match number(value) {
        None => "Count must be a number",
        Some(count) if count < 0.0 => "Count must be non-negative",
        Some(count) if count.fract() != 0.0 => "Count must be a whole number",
        Some(count) if count > f64::from(u32::MAX) => "Count is too large",
        Some(_) => return None,
    };
    Some(message.to_string())
}

fn check_dimension(label: &str, value: &str) -> Option<String> {
    if value.is_empty() {
        return Some(format!("{label} is required"));
    }
    match number(value) {
        None => Some(format!("{label} must be a number")),
        Some(n) if n <= 0.0 => Some(format!("{label} must be greater than 0")),
        Some(_) => None,
    }
}

/// Parses a finite decimal number.
fn number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https" | "ftp")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}
