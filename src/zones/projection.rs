use std::{collections::BTreeMap, path::Path};

use ahash::AHashMap;
use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use super::ZoneId;

/// Projected hectares per zone, with the fixed order zones are reported in.
#[derive(Debug, Clone)]
pub struct ProjectionTable {
    order: Vec<ZoneId>,
    hectares: AHashMap<ZoneId, f64>,
}

/// On-disk layout: `{"zones": ["1", ...], "hectares": {"1": 84940, ...}}`.
#[derive(Deserialize)]
struct ProjectionFile {
    #[serde(default)]
    zones: Option<Vec<String>>,
    hectares: BTreeMap<String, f64>,
}

impl Default for ProjectionTable {
    /// Projections for the 2025/26 campaign.
    fn default() -> Self {
        Self::new(vec![
            ("1", 84_940.0),
            ("2", 155_256.0),
            ("3", 158_675.0),
            ("4", 134_574.0),
        ])
    }
}

impl ProjectionTable {
    /// Build a table from (zone, hectares) pairs; the pair order is the report order.
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let mut order = Vec::new();
        let mut hectares = AHashMap::new();
        for (zone, value) in entries {
            let zone = ZoneId::new(zone);
            if hectares.insert(zone.clone(), value).is_none() {
                order.push(zone);
            }
        }
        Self { order, hectares }
    }

    /// Read a projection file. Without an explicit `zones` list, zones are reported
    /// in ascending key order.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        let file: ProjectionFile = serde_json::from_slice(bytes)
            .context("Failed to parse projection table")?;
        ensure!(
            file.hectares.values().all(|v| v.is_finite() && *v >= 0.0),
            "Projected hectares must be finite and non-negative"
        );

        let mut table = Self::new(file.hectares.iter().map(|(k, v)| (k.as_str(), *v)));
        if let Some(zones) = file.zones {
            table.order = zones.iter().map(|z| ZoneId::new(z)).collect();
        }
        Ok(table)
    }

    /// Read a projection file from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read projection file: {}", path.display()))?;
        Self::from_json_bytes(&bytes)
            .with_context(|| format!("Invalid projection file: {}", path.display()))
    }

    /// Get the zones in report order.
    #[inline] pub fn order(&self) -> &[ZoneId] { &self.order }

    /// Get the projected hectares of a zone, if the table has it.
    #[inline] pub fn get(&self, zone: &ZoneId) -> Option<f64> { self.hectares.get(zone).copied() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_campaign_table() {
        let table = ProjectionTable::default();
        assert_eq!(table.order().iter().map(ZoneId::id).collect::<Vec<_>>(), ["1", "2", "3", "4"]);
        assert_eq!(table.get(&"3".into()), Some(158_675.0));
        assert_eq!(table.get(&"5".into()), None);
    }

    #[test]
    fn file_without_order_sorts_keys() {
        let table = ProjectionTable::from_json_bytes(br#"{"hectares": {"2": 10, "1": 20}}"#).unwrap();
        assert_eq!(table.order().iter().map(ZoneId::id).collect::<Vec<_>>(), ["1", "2"]);
        assert_eq!(table.get(&"1".into()), Some(20.0));
    }

    #[test]
    fn file_order_is_kept() {
        let table = ProjectionTable::from_json_bytes(
            br#"{"zones": ["4", "1"], "hectares": {"1": 5, "4": 7}}"#
        ).unwrap();
        assert_eq!(table.order().iter().map(ZoneId::id).collect::<Vec<_>>(), ["4", "1"]);
    }

    #[test]
    fn negative_projection_is_rejected() {
        assert!(ProjectionTable::from_json_bytes(br#"{"hectares": {"1": -5}}"#).is_err());
        assert!(ProjectionTable::from_json_bytes(b"[1, 2]").is_err());
    }
}
