use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::instrument::defs::{
    AI_TOOLS_USAGE, AI_TOOLS_USAGE_LABEL, BUILTIN_NAME, DEFAULT_MIN_VALID_ITEMS,
    LEARNING_EFFECTIVENESS, LEARNING_EFFECTIVENESS_LABEL,
};
use crate::instrument::{Instrument, ItemBlock};

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("cannot read instrument file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed instrument JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid instrument: {0}")]
    Invalid(String),
}

pub fn builtin_instrument() -> Instrument {
    Instrument {
        name: BUILTIN_NAME.to_string(),
        min_valid_items: DEFAULT_MIN_VALID_ITEMS,
        x: block("X", AI_TOOLS_USAGE_LABEL, AI_TOOLS_USAGE),
        y: block("Y", LEARNING_EFFECTIVENESS_LABEL, LEARNING_EFFECTIVENESS),
    }
}

fn block(id: &str, label: &str, items: &[&str]) -> ItemBlock {
    ItemBlock {
        id: id.to_string(),
        label: label.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn load_instrument(path: &Path) -> Result<Instrument, InstrumentError> {
    let text = fs::read_to_string(path)?;
    let instrument = parse_instrument(&text)?;
    tracing::info!(
        path = %path.display(),
        name = %instrument.name,
        items = instrument.total_items(),
        "loaded instrument"
    );
    Ok(instrument)
}

pub fn parse_instrument(text: &str) -> Result<Instrument, InstrumentError> {
    let mut instrument: Instrument = serde_json::from_str(text)?;
    for block in [&mut instrument.x, &mut instrument.y] {
        block.id = block.id.trim().to_string();
        for item in &mut block.items {
            *item = item.trim().to_string();
        }
    }
    validate_instrument(&instrument)?;
    Ok(instrument)
}

pub fn validate_instrument(instrument: &Instrument) -> Result<(), InstrumentError> {
    for block in [&instrument.x, &instrument.y] {
        if block.id.is_empty() {
            return Err(InstrumentError::Invalid(format!(
                "block '{}' has an empty id",
                block.label
            )));
        }
        if block.items.is_empty() {
            return Err(InstrumentError::Invalid(format!(
                "block '{}' has no items",
                block.id
            )));
        }
        if let Some(empty) = block.items.iter().position(|item| item.is_empty()) {
            return Err(InstrumentError::Invalid(format!(
                "block '{}' item {} is empty",
                block.id,
                empty + 1
            )));
        }
    }
    if instrument.x.id == instrument.y.id {
        return Err(InstrumentError::Invalid(format!(
            "blocks share the id '{}'",
            instrument.x.id
        )));
    }

    let mut seen = BTreeSet::new();
    for item in instrument.x.items.iter().chain(&instrument.y.items) {
        if !seen.insert(item.as_str()) {
            return Err(InstrumentError::Invalid(format!(
                "item listed more than once: {item}"
            )));
        }
    }

    let total = instrument.total_items();
    if instrument.min_valid_items == 0 || instrument.min_valid_items > total {
        return Err(InstrumentError::Invalid(format!(
            "min_valid_items must be within 1..={total}, got {}",
            instrument.min_valid_items
        )));
    }
    Ok(())
}
