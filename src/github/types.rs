use serde::{Deserialize, Serialize};

/// Authenticated user, as returned by `GET /user`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub login: String,
}

/// A published release. Only the naming fields matter here; releases are used
/// as notification markers, not for shipping artifacts.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Release {
    pub tag_name: String,
    pub name: Option<String>,
}

impl Release {
    /// Title used for duplicate detection. GitHub leaves `name` null when a
    /// release was created without an explicit title.
    pub fn title(self) -> String {
        self.name.unwrap_or(self.tag_name)
    }
}

/// Payload for `POST /repos/{owner}/{repo}/releases`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CreateRelease {
    pub tag_name: String,
    pub name: String,
    pub body: String,
}
