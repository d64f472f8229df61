//! Bundled assets
//!
//! Icons come from `gpui-component-assets`; this source only adapts it to
//! GPUI's asset loader.

use gpui::{AssetSource, Result, SharedString};
use gpui_component_assets::Assets as ComponentAssets;
use std::borrow::Cow;

pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        ComponentAssets::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_loads_nothing() {
        assert!(matches!(Assets.load(""), Ok(None)));
    }

    #[test]
    fn test_missing_asset_is_an_error() {
        assert!(Assets.load("icons/does-not-exist.svg").is_err());
    }
}
