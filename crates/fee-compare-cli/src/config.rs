use fee_compare_core::variant::VariantSet;
use tracing::info;

use crate::input;

/// Built-in variants, overlaid with any variants from the YAML config file.
pub fn load_variants(path: Option<&str>) -> Result<VariantSet, Box<dyn std::error::Error>> {
    let mut variants = VariantSet::builtin();
    if let Some(path) = path {
        let extra: VariantSet = input::file::read_yaml(path)?;
        variants.merge(extra)?;
        info!(path, variants = ?variants.names(), "loaded variant config");
    }
    Ok(variants)
}
