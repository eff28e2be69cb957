//! Parent contexts used when svcgen runs on its own.

use serde::Serialize;

use crate::domain::{AppError, ApplicationInjection};
use crate::ports::ParentContext;

/// Parent that supports every capability and records what it receives.
///
/// The CLI uses this to report the dependency, module and application
/// fragments a composing generator would have to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordingParentContext {
    pub dependencies: Vec<String>,
    pub application: Vec<ApplicationInjection>,
    pub modules: Vec<String>,
}

impl RecordingParentContext {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParentContext for RecordingParentContext {
    fn add_dependency(&mut self, dependency: &str) -> Result<(), AppError> {
        if !self.dependencies.iter().any(|existing| existing == dependency) {
            self.dependencies.push(dependency.to_string());
        }
        Ok(())
    }

    fn add_to_application(&mut self, injection: ApplicationInjection) -> Result<(), AppError> {
        self.application.push(injection);
        Ok(())
    }

    fn add_module(&mut self, module: &str) -> Result<(), AppError> {
        if !self.modules.iter().any(|existing| existing == module) {
            self.modules.push(module.to_string());
        }
        Ok(())
    }
}

/// Parent offering no capabilities: standalone execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandaloneParentContext;

impl ParentContext for StandaloneParentContext {}
