use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response body of the gBizINFO `hojin` endpoints. Depending on the
/// endpoint the hits arrive under `hojin-infos` or `hojin`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct HojinResponse {
    #[serde(rename = "hojin-infos")]
    pub hojin_infos: Option<Vec<HojinInfo>>,
    pub hojin: Option<Vec<HojinInfo>>,
}

impl HojinResponse {
    /// Hits from `hojin-infos`, or from `hojin` when the former is absent or empty.
    pub fn into_hits(self) -> Vec<HojinInfo> {
        match self.hojin_infos {
            Some(hits) if !hits.is_empty() => hits,
            _ => self.hojin.unwrap_or_default(),
        }
    }
}

/// A registry entry exactly as gBizINFO sent it. Values of any JSON type,
/// explicit nulls included, survive a round trip.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct HojinInfo(Map<String, Value>);

impl HojinInfo {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of `key`. Other JSON types yield `None`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }
}
