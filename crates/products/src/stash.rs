//! Ordered product collection.

use serde::{Deserialize, Serialize};

use stash_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

/// The ordered collection of committed product records.
///
/// Mutated only by append and remove-by-identifier; insertion order is
/// preserved and identifiers are unique for the lifetime of the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stash {
    products: Vec<Product>,
}

impl Stash {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from existing records.
    ///
    /// Duplicate identifiers are rejected, same as repeated [`Stash::append`].
    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut stash = Self::new();
        for product in products {
            stash.append(product)?;
        }
        Ok(stash)
    }

    /// Append a record to the end of the collection.
    ///
    /// A duplicate identifier is a conflict. Unreachable through the view,
    /// which mints a fresh id per submission.
    pub fn append(&mut self, product: Product) -> DomainResult<()> {
        if self.contains(&product.id_typed()) {
            return Err(DomainError::conflict(format!(
                "product {} already in stash",
                product.id_typed()
            )));
        }
        self.products.push(product);
        Ok(())
    }

    /// Remove the record with the matching identifier, if present.
    ///
    /// Returns the removed record; an absent id returns `None` (benign, not
    /// an error). The relative order of remaining records is preserved.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id_typed() == *id)?;
        Some(self.products.remove(index))
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == *id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
