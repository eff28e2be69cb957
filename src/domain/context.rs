//! Values exchanged with the parent (composing) generator.

use std::fmt;

use serde::Serialize;

/// Extension points a parent context may expose to service generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Capability {
    AddDependency,
    AddToApplication,
    AddModule,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::AddDependency => "addDependency",
            Capability::AddToApplication => "addToApplication",
            Capability::AddModule => "addModule",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fragment of Swift code the parent places into the generated application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "slot", content = "code", rename_all = "snake_case")]
pub enum ApplicationInjection {
    /// `import <Module>` line at the top of `Application.swift`.
    ServiceImport(String),
    /// Public stored property holding the service client.
    ServiceVariable(String),
    /// Initializer call executed during application start-up.
    Service(String),
}

impl ApplicationInjection {
    pub fn code(&self) -> &str {
        match self {
            ApplicationInjection::ServiceImport(code)
            | ApplicationInjection::ServiceVariable(code)
            | ApplicationInjection::Service(code) => code,
        }
    }
}
