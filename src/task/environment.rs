use serde::{Deserialize, Serialize};

/// Earthcore proxy used for production tasks.
pub const PROD_URL: &str = "http://ecfs-buildings.3dmap.here.com/ec-proxy/";
/// Earthcore proxy used for user-acceptance testing.
pub const UAT_URL: &str = "http://ecfs-buildings-uat.3dmap.here.com/ec-proxy/";

/// Target environment embedded into every generated task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Environment {
    Prod,
    #[default]
    Uat,
}

impl Environment {
    /// Map a raw form value to an environment.
    ///
    /// Only the exact string `PROD` selects production; anything else,
    /// including a missing field, falls back to UAT.
    pub fn from_form_value(value: Option<&str>) -> Self {
        match value {
            Some("PROD") => Environment::Prod,
            _ => Environment::Uat,
        }
    }

    pub fn earthcore_url(&self) -> &'static str {
        match self {
            Environment::Prod => PROD_URL,
            Environment::Uat => UAT_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Prod => "PROD",
            Environment::Uat => "UAT",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
