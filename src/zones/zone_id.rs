use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// Identifier of a reporting zone, e.g. "1" to "4".
/// Keeps the trimmed text as found in the data, shared rather than copied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(Arc<str>);

impl ZoneId {
    pub fn new(id: &str) -> Self { Self(Arc::from(id.trim())) }

    #[inline] pub fn id(&self) -> &str { &self.0 }
}

impl From<&str> for ZoneId {
    fn from(id: &str) -> Self { Self::new(id) }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(&self.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let zone = ZoneId::new(" 2 ");
        assert_eq!(serde_json::to_string(&zone).unwrap(), "\"2\"");
        let back: ZoneId = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(back, zone);
    }

    #[test]
    fn display_honors_width() {
        assert_eq!(format!("[{:<3}]", ZoneId::new("1")), "[1  ]");
    }
}
