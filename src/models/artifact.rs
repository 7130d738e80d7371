use serde::{Deserialize, Serialize};

/// A rendered build file and the name it is written under. One artifact per
/// configured image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFileArtifact {
    pub filename: String,
    pub content: String,
}
