//! Category label normalization for table and mapping containers.
//!
//! BMRS power type names like "Fossil Gas" are harmonized to the display
//! names used in summary tables. The same five-entry label map is applied
//! whether the source is a dataset's category column or the keys of a plain
//! mapping; unmapped names pass through unchanged. Both entry points are
//! pure and leave their input untouched.

use std::collections::HashMap;

use polars::prelude::*;

use crate::constants::{display_label, CATEGORY_COL};
use crate::error::Result;

/// Copy of the dataset with category column values rewritten to display names
///
/// Applying this to its own output is a no-op, since display names are not
/// themselves keys in the label map.
pub fn rename_table_categories(dataset: &DataFrame) -> Result<DataFrame> {
    let renamed: StringChunked = dataset
        .column(CATEGORY_COL)?
        .str()?
        .iter()
        .map(|value| value.map(display_label))
        .collect();

    let mut result = dataset.clone();
    result.with_column(renamed.with_name(CATEGORY_COL.into()).into_series())?;
    Ok(result)
}

/// Copy of a category-keyed mapping with keys rewritten to display names
///
/// The value under a renamed key moves to the new key; unmapped keys are
/// kept as-is. The input mapping is not mutated.
pub fn rename_mapping_keys<V: Clone>(mapping: &HashMap<String, V>) -> HashMap<String, V> {
    mapping
        .iter()
        .map(|(key, value)| (display_label(key).to_string(), value.clone()))
        .collect()
}
