//! Extension points offered by the composing (parent) generator.

use crate::domain::{AppError, ApplicationInjection, Capability};

/// Capability set a parent generator exposes to service generators.
///
/// Every operation is optional. The default implementations report
/// [`AppError::UnsupportedContext`], so a parent that supports nothing is an
/// empty `impl`. Service generators decide which capabilities they require.
pub trait ParentContext {
    /// Add one Swift package dependency line.
    fn add_dependency(&mut self, dependency: &str) -> Result<(), AppError> {
        let _ = dependency;
        Err(AppError::UnsupportedContext { capability: Capability::AddDependency })
    }

    /// Place a code fragment into the generated application.
    fn add_to_application(&mut self, injection: ApplicationInjection) -> Result<(), AppError> {
        let _ = injection;
        Err(AppError::UnsupportedContext { capability: Capability::AddToApplication })
    }

    /// Add a module to the package target.
    fn add_module(&mut self, module: &str) -> Result<(), AppError> {
        let _ = module;
        Err(AppError::UnsupportedContext { capability: Capability::AddModule })
    }
}
