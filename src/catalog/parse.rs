use anyhow::{Context, Result, anyhow};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::radius::Located;

use super::{Catalog, Validate};

pub fn parse_catalog<T>(name: &str, raw: &str) -> Result<Catalog<T>>
where
    T: DeserializeOwned + Located + Validate,
{
    let parsed: Value =
        serde_json::from_str(raw).with_context(|| format!("invalid JSON in {name} catalog"))?;
    let entries = parsed
        .as_array()
        .ok_or_else(|| anyhow!("{name} catalog must be a JSON array"))?;

    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let item = T::deserialize(entry)
            .with_context(|| format!("invalid entry #{index} in {name} catalog"))?;
        items.push(item);
    }

    Catalog::new(items).with_context(|| format!("{name} catalog failed validation"))
}
