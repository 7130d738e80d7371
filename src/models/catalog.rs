use serde::{Deserialize, Serialize};

/// Default run command for base images missing from the catalog.
pub const FALLBACK_COMMAND: &str = "/bin/sh";

/// One supported base image with its conventional in-container destination
/// root and default startup command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseImageEntry {
    pub identifier: String,
    pub dest_root: String,
    pub default_command: String,
}

/// Fixed table of supported base images. Built once at startup, passed by
/// reference, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseImageCatalog {
    entries: Vec<BaseImageEntry>,
}

impl Default for BaseImageCatalog {
    fn default() -> Self {
        let entry = |identifier: &str, dest_root: &str, default_command: &str| BaseImageEntry {
            identifier: identifier.to_string(),
            dest_root: dest_root.to_string(),
            default_command: default_command.to_string(),
        };

        Self {
            entries: vec![
                entry("python:3.9-slim", "/app/", r#"["python3", "app.py"]"#),
                entry("node:16-alpine", "/usr/src/app/", r#"["node", "server.js"]"#),
                entry(
                    "nginx:alpine",
                    "/usr/share/nginx/html/",
                    r#"["nginx", "-g", "daemon off;"]"#,
                ),
                entry("golang:1.17-alpine", "/go/src/app/", r#"["go", "run", "main.go"]"#),
                entry("openjdk:17-slim", "/usr/src/app/", r#"["java", "-jar", "app.jar"]"#),
                entry("ruby:3.1-alpine", "/usr/src/app/", r#"["ruby", "app.rb"]"#),
                entry("ubuntu:20.04", "/app/", r#"["/bin/bash"]"#),
                entry("alpine:latest", "/app/", r#"["/bin/sh"]"#),
            ],
        }
    }
}

impl BaseImageCatalog {
    fn get(&self, identifier: &str) -> Option<&BaseImageEntry> {
        self.entries.iter().find(|e| e.identifier == identifier)
    }

    /// All supported identifiers, in presentation order
    pub fn identifiers(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.identifier.as_str()).collect()
    }

    /// Default run command for `identifier`, falling back to a plain shell
    pub fn default_command(&self, identifier: &str) -> &str {
        self.get(identifier)
            .map(|e| e.default_command.as_str())
            .unwrap_or(FALLBACK_COMMAND)
    }

    /// Destination root inside the container for `identifier`. Unknown
    /// identifiers map to the empty root, so copies land in the engine's
    /// default working directory.
    pub fn dest_root(&self, identifier: &str) -> &str {
        self.get(identifier).map(|e| e.dest_root.as_str()).unwrap_or("")
    }
}
