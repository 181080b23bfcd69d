use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stash_core::{DomainError, DomainResult, Entity, ProductId};

/// Fixed classification of a product's function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Cleansing,
    Conditioning,
    Treatment,
    Styling,
    Tools,
}

impl Category {
    /// All variants, in form-select order.
    pub const ALL: [Category; 5] = [
        Category::Cleansing,
        Category::Conditioning,
        Category::Treatment,
        Category::Styling,
        Category::Tools,
    ];

    /// Human-readable label (also the `FromStr` form).
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cleansing => "Cleansing",
            Category::Conditioning => "Conditioning",
            Category::Treatment => "Treatment",
            Category::Styling => "Styling",
            Category::Tools => "Tools",
        }
    }

    /// Stable per-variant class hook for badge styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Cleansing => "tag-cleansing",
            Category::Conditioning => "tag-conditioning",
            Category::Treatment => "tag-treatment",
            Category::Styling => "tag-styling",
            Category::Tools => "tag-tools",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Cleansing
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cleansing" => Ok(Category::Cleansing),
            "Conditioning" => Ok(Category::Conditioning),
            "Treatment" => Ok(Category::Treatment),
            "Styling" => Ok(Category::Styling),
            "Tools" => Ok(Category::Tools),
            other => Err(DomainError::validation(format!(
                "unknown category: {}",
                other
            ))),
        }
    }
}

/// Star rating in `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(5);

    /// Create a rating, rejecting values outside `[1, 5]`.
    pub fn try_new(value: u8) -> DomainResult<Self> {
        if !(1..=5).contains(&value) {
            return Err(DomainError::validation(format!(
                "rating must be in [1, 5], got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Create a rating, clamping out-of-range values into `[1, 5]`.
    ///
    /// Intended for UI inputs that are already constrained by construction
    /// (e.g. a fixed row of five star buttons).
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(1, 5))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::MAX
    }
}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: one product record in the collection.
///
/// Constructed only via [`Product::new`]; there is no update-in-place, so the
/// creation-time invariants (non-empty name/brand) hold for the lifetime of
/// the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    brand: String,
    category: Category,
    rating: Rating,
}

impl Product {
    /// Create a product, rejecting an empty `name` or `brand`.
    ///
    /// Non-empty is the whole contract: any character, including whitespace,
    /// counts as content.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: Category,
        rating: Rating,
    ) -> DomainResult<Self> {
        let name = name.into();
        let brand = brand.into();

        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        if brand.is_empty() {
            return Err(DomainError::validation("brand cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            brand,
            category,
            rating,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// The in-progress, not-yet-committed form state for a new product.
///
/// Mirrors [`Product`] minus the identifier. Field setters are direct-set
/// and always succeed; validation happens only at [`ProductDraft::commit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub rating: Rating,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            brand: String::new(),
            category: Category::Cleansing,
            rating: Rating::MAX,
        }
    }
}

impl ProductDraft {
    /// Whether both required fields are non-empty.
    pub fn is_submittable(&self) -> bool {
        !self.name.is_empty() && !self.brand.is_empty()
    }

    /// Convert the draft into a product under a fresh identifier.
    ///
    /// The draft itself is left untouched; callers reset it separately once
    /// the commit has been accepted.
    pub fn commit(&self, id: ProductId) -> DomainResult<Product> {
        Product::new(
            id,
            self.name.clone(),
            self.brand.clone(),
            self.category,
            self.rating,
        )
    }

    /// Reset every field back to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
