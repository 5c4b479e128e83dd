// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectorConfig {
    /// Headroom the PSU must supply above CPU tdp + GPU tdp.
    pub psu_buffer_watts: i64,
}

impl SelectorConfig {
    pub fn v0() -> Self {
        Self {
            psu_buffer_watts: 50,
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::v0()
    }
}
