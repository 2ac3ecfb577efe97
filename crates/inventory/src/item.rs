use serde::{Deserialize, Serialize};

use confereai_core::{DomainError, DomainResult, Entity, ItemCode};

/// One catalog entry as it appears in seed data.
///
/// JSON shape: `{"code": "...", "name": "...", "category": "...", "initialStock": 0}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedItem {
    pub code: String,
    pub name: String,
    pub category: String,
    pub initial_stock: i64,
}

impl SeedItem {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        initial_stock: i64,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            category: category.into(),
            initial_stock,
        }
    }
}

/// Entity: one stocked item.
///
/// `code` never changes after construction. `stock_level` is signed: consumption
/// past zero is allowed and leaves a deficit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    code: ItemCode,
    name: String,
    category: String,
    stock_level: i64,
}

impl InventoryRecord {
    pub fn new(
        code: ItemCode,
        name: impl Into<String>,
        category: impl Into<String>,
        stock_level: i64,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            category: category.into(),
            stock_level,
        }
    }

    pub fn code(&self) -> &ItemCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn stock_level(&self) -> i64 {
        self.stock_level
    }

    /// Apply `delta` to the stock level and return the new level.
    ///
    /// Only the store calls this; there is no floor at zero.
    pub(crate) fn apply_delta(&mut self, delta: i64) -> DomainResult<i64> {
        self.stock_level = self
            .stock_level
            .checked_add(delta)
            .ok_or_else(|| DomainError::validation("stock level overflow"))?;
        Ok(self.stock_level)
    }
}

impl TryFrom<SeedItem> for InventoryRecord {
    type Error = DomainError;

    fn try_from(seed: SeedItem) -> Result<Self, Self::Error> {
        let code = ItemCode::parse(&seed.code)?;
        if seed.name.trim().is_empty() {
            return Err(DomainError::validation(format!("{code}: name cannot be empty")));
        }
        Ok(Self::new(code, seed.name, seed.category, seed.initial_stock))
    }
}

impl Entity for InventoryRecord {
    type Id = ItemCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}
