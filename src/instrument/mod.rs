pub mod defs;
pub mod loader;

use serde::{Deserialize, Serialize};

/// One Likert block: the question texts whose answers are summed into a
/// composite. `id` prefixes the composite column names (`{id}_total`,
/// `{id}_mean`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBlock {
    pub id: String,
    pub label: String,
    pub items: Vec<String>,
}

impl ItemBlock {
    pub fn total_column(&self) -> String {
        format!("{}_total", self.id)
    }

    pub fn mean_column(&self) -> String {
        format!("{}_mean", self.id)
    }
}

/// Survey instrument: the expected item columns of the export, grouped into
/// the predictor block `x` and the outcome block `y`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub name: String,
    #[serde(default = "default_min_valid_items")]
    pub min_valid_items: usize,
    pub x: ItemBlock,
    pub y: ItemBlock,
}

impl Instrument {
    pub fn total_items(&self) -> usize {
        self.x.items.len() + self.y.items.len()
    }

    pub fn composite_columns(&self) -> [String; 4] {
        [
            self.x.total_column(),
            self.y.total_column(),
            self.x.mean_column(),
            self.y.mean_column(),
        ]
    }
}

fn default_min_valid_items() -> usize {
    defs::DEFAULT_MIN_VALID_ITEMS
}

#[cfg(test)]
#[path = "../../tests/src_inline/instrument/tests.rs"]
mod tests;
