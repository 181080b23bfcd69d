//! Pure state controller for the inventory view.
//!
//! Owns the two pieces of view state — the committed collection and the
//! in-progress form draft — and mediates every mutation to both. Rejected
//! operations are silent no-ops that leave both containers unchanged; a
//! debug event records them for development visibility.

use tracing::debug;

use stash_core::{DomainResult, ProductId};
use stash_products::{Category, Product, ProductDraft, Rating, Stash};

/// View-owned state: the collection plus the form draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryView {
    stash: Stash,
    draft: ProductDraft,
}

impl InventoryView {
    /// Create a view with an empty collection and a default draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view seeded with existing records.
    pub fn with_products(products: Vec<Product>) -> DomainResult<Self> {
        Ok(Self {
            stash: Stash::from_products(products)?,
            draft: ProductDraft::default(),
        })
    }

    pub fn products(&self) -> &[Product] {
        self.stash.products()
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    // Draft field setters: direct set, always succeed. Validation happens
    // only at submission.

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.draft.brand = brand.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.draft.category = category;
    }

    pub fn set_rating(&mut self, rating: Rating) {
        self.draft.rating = rating;
    }

    /// Commit the draft into the collection under a fresh identifier.
    ///
    /// A draft with an empty name or brand is rejected silently: the
    /// collection and the draft are left unchanged and `None` is returned.
    /// On success the new record's id is returned and the draft resets to
    /// its defaults.
    pub fn submit(&mut self) -> Option<ProductId> {
        let id = ProductId::new();
        let product = match self.draft.commit(id) {
            Ok(product) => product,
            Err(err) => {
                debug!(%err, "submission rejected");
                return None;
            }
        };

        // The id was minted just above, so a conflict cannot occur; handle
        // it anyway rather than panic in view code.
        if let Err(err) = self.stash.append(product) {
            debug!(%err, "submission rejected");
            return None;
        }

        self.draft.reset();
        debug!(%id, "product added to stash");
        Some(id)
    }

    /// Remove a record by id. An absent id is a silent no-op.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        match self.stash.remove(id) {
            Some(_) => {
                debug!(%id, "product removed from stash");
                true
            }
            None => {
                debug!(%id, "removal ignored: id not in stash");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_draft(view: &mut InventoryView, name: &str, brand: &str) {
        view.set_name(name);
        view.set_brand(brand);
    }

    fn seeded_pair() -> (InventoryView, ProductId, ProductId) {
        let first = Product::new(
            ProductId::new(),
            "Hydrating Shampoo",
            "PureCare",
            Category::Cleansing,
            Rating::clamped(5),
        )
        .unwrap();
        let second = Product::new(
            ProductId::new(),
            "Shea Butter Mask",
            "Natura",
            Category::Treatment,
            Rating::clamped(4),
        )
        .unwrap();

        let first_id = first.id_typed();
        let second_id = second.id_typed();
        let view = InventoryView::with_products(vec![first, second]).unwrap();
        (view, first_id, second_id)
    }

    #[test]
    fn valid_submit_appends_exactly_one_record() {
        let mut view = InventoryView::new();
        fill_draft(&mut view, "Leave-in Conditioner", "SheaMoisture");
        view.set_category(Category::Styling);
        view.set_rating(Rating::clamped(4));

        let id = view.submit().unwrap();

        assert_eq!(view.products().len(), 1);
        let added = &view.products()[0];
        assert_eq!(added.id_typed(), id);
        assert_eq!(added.name(), "Leave-in Conditioner");
        assert_eq!(added.brand(), "SheaMoisture");
        assert_eq!(added.category(), Category::Styling);
        assert_eq!(added.rating().value(), 4);
    }

    #[test]
    fn successful_submit_resets_the_draft() {
        let mut view = InventoryView::new();
        fill_draft(&mut view, "Leave-in Conditioner", "SheaMoisture");
        view.set_category(Category::Styling);
        view.set_rating(Rating::clamped(4));

        view.submit().unwrap();
        assert_eq!(view.draft(), &ProductDraft::default());
    }

    #[test]
    fn submit_with_empty_name_is_a_silent_no_op() {
        let mut view = InventoryView::new();
        fill_draft(&mut view, "", "SheaMoisture");
        let draft_before = view.draft().clone();

        assert!(view.submit().is_none());
        assert!(view.products().is_empty());
        assert_eq!(view.draft(), &draft_before);
    }

    #[test]
    fn submit_with_empty_brand_is_a_silent_no_op() {
        let mut view = InventoryView::new();
        fill_draft(&mut view, "Leave-in Conditioner", "");
        let draft_before = view.draft().clone();

        assert!(view.submit().is_none());
        assert!(view.products().is_empty());
        assert_eq!(view.draft(), &draft_before);
    }

    #[test]
    fn submit_with_whitespace_only_name_is_accepted() {
        // Required fields are checked for non-emptiness only; whitespace
        // counts as content.
        let mut view = InventoryView::new();
        fill_draft(&mut view, " ", "SheaMoisture");

        assert!(view.submit().is_some());
        assert_eq!(view.products().len(), 1);
        assert_eq!(view.products()[0].name(), " ");
        assert_eq!(view.draft(), &ProductDraft::default());
    }

    #[test]
    fn every_submission_gets_a_unique_id() {
        let mut view = InventoryView::new();
        let mut ids = std::collections::HashSet::new();

        for n in 0..50 {
            fill_draft(&mut view, &format!("Product {n}"), "PureCare");
            let id = view.submit().unwrap();
            assert!(ids.insert(id), "duplicate id issued");
        }

        assert_eq!(view.products().len(), 50);
    }

    #[test]
    fn remove_present_id_drops_only_that_record() {
        let (mut view, first_id, second_id) = seeded_pair();

        assert!(view.remove(&first_id));

        assert_eq!(view.products().len(), 1);
        assert_eq!(view.products()[0].id_typed(), second_id);
        assert_eq!(view.products()[0].name(), "Shea Butter Mask");
    }

    #[test]
    fn remove_absent_id_changes_nothing() {
        let (mut view, _, _) = seeded_pair();
        let before = view.clone();

        assert!(!view.remove(&ProductId::new()));
        assert_eq!(view, before);
    }

    #[test]
    fn remove_preserves_relative_order_of_the_rest() {
        let mut view = InventoryView::new();
        let mut ids = Vec::new();
        for name in ["A", "B", "C", "D"] {
            fill_draft(&mut view, name, "PureCare");
            ids.push(view.submit().unwrap());
        }

        view.remove(&ids[1]);

        let names: Vec<&str> = view.products().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["A", "C", "D"]);
    }

    #[test]
    fn field_setters_touch_only_the_draft() {
        let (mut view, ..) = seeded_pair();
        let products_before = view.products().to_vec();

        view.set_name("Curl Cream");
        view.set_brand("Cantu");
        view.set_category(Category::Styling);
        view.set_rating(Rating::clamped(3));

        assert_eq!(view.products(), products_before.as_slice());
        assert_eq!(view.draft().name, "Curl Cream");
        assert_eq!(view.draft().brand, "Cantu");
        assert_eq!(view.draft().category, Category::Styling);
        assert_eq!(view.draft().rating.value(), 3);
    }

    #[test]
    fn submission_scenario_from_a_styling_draft() {
        // Draft {name: "Leave-in Conditioner", brand: "SheaMoisture",
        // category: Styling, rating: 4} submitted onto a seeded collection.
        let (mut view, ..) = seeded_pair();
        let len_before = view.products().len();

        fill_draft(&mut view, "Leave-in Conditioner", "SheaMoisture");
        view.set_category(Category::Styling);
        view.set_rating(Rating::clamped(4));
        view.submit().unwrap();

        assert_eq!(view.products().len(), len_before + 1);
        let last = view.products().last().unwrap();
        assert_eq!(last.name(), "Leave-in Conditioner");
        assert_eq!(last.brand(), "SheaMoisture");
        assert_eq!(last.category(), Category::Styling);
        assert_eq!(last.rating().value(), 4);
        assert_eq!(view.draft(), &ProductDraft::default());
    }
}
