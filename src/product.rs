use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::simulation::SimulationRequest;
use crate::types::ProductCode;

/// Lending product with admissible principal and term ranges.
/// Immutable once loaded; owned by the catalog supplied per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub code: ProductCode,
    pub name: String,
    pub min_principal: Money,
    pub max_principal: Money,
    pub min_term_months: u32,
    pub max_term_months: u32,
    pub monthly_rate: Rate,
}

impl Product {
    /// both ranges are inclusive on both ends
    pub fn accepts(&self, principal: Money, term_months: u32) -> bool {
        principal >= self.min_principal
            && principal <= self.max_principal
            && term_months >= self.min_term_months
            && term_months <= self.max_term_months
    }
}

/// Ordered collection of products; iteration order is the selection order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product whose value and term ranges both admit the request.
    /// First-match in catalog order, deliberately not best-fit; overlapping
    /// ranges resolve to whichever product comes first.
    pub fn find_eligible(&self, request: &SimulationRequest) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.accepts(request.principal, request.term_months))
    }
}

impl FromIterator<Product> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}
