use std::{collections::HashSet, fs, path::Path};

use anyhow::{bail, Context, Result};
use shared::domain::Product;

/// Reads a JSON array of listings to seed the store with.
pub fn load_seed_file(path: &Path) -> Result<Vec<Product>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file '{}'", path.display()))?;
    let products =
        parse_seed(&raw).with_context(|| format!("invalid seed file '{}'", path.display()))?;
    tracing::info!(path = %path.display(), records = products.len(), "loaded seed listings");
    Ok(products)
}

pub fn parse_seed(raw: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> =
        serde_json::from_str(raw).context("seed must be a JSON array of listings")?;

    let mut seen = HashSet::with_capacity(products.len());
    for product in &products {
        if !seen.insert(product.id) {
            bail!("duplicate listing id {} in seed", product.id);
        }
    }

    Ok(products)
}
