use indexmap::IndexMap;

/// Link title → URL. Overwriting a title keeps its original position.
pub type Links = IndexMap<String, String>;

/// Transport status used when none was set explicitly.
pub const DEFAULT_STATUS: u16 = 200;

/// Transport status used when an error is reported without a code.
pub const FALLBACK_ERROR_STATUS: u16 = 500;

/// Ad-hoc object payload for `Envelope::data`.
pub type Data = serde_json::Map<String, serde_json::Value>;

/// Ad-hoc object payload for `Envelope::meta`.
pub type Meta = serde_json::Map<String, serde_json::Value>;
