//! Remap command: regroup an existing flat credential store in place.
//!
//! Runs only the finalize step of `generate`, for projects whose
//! `config/localdev-config.json` was filled with `<prefix>_<field>` entries
//! by other generators.

use crate::app::AppContext;
use crate::app::commands::generate::finalize::{Finalized, persist, regroup};
use crate::app::commands::generate::shared_files::read_flat_store;
use crate::domain::paths::LOCALDEV_CONFIG_FILE;
use crate::domain::{AppError, ServiceConfiguration};
use crate::ports::{ProjectFilesystem, ServiceCatalog, TemplateRenderer};

pub fn execute<F, C, T>(
    ctx: &AppContext<F, C, T>,
    config: &ServiceConfiguration,
) -> Result<Finalized, AppError>
where
    F: ProjectFilesystem,
    C: ServiceCatalog,
    T: TemplateRenderer,
{
    if !ctx.project().file_exists(LOCALDEV_CONFIG_FILE) {
        return Err(AppError::config_error(format!(
            "{} not found; nothing to remap",
            LOCALDEV_CONFIG_FILE
        )));
    }

    let flat = read_flat_store(ctx.project(), LOCALDEV_CONFIG_FILE)?;
    let extraction = regroup(&flat, ctx.labels(), config);

    // Rewriting would discard a store that is already grouped by instance.
    if !flat.is_empty() && extraction.credentials.is_empty() {
        return Err(AppError::config_error(format!(
            "No key in {} matches the label table; it may already be grouped by instance",
            LOCALDEV_CONFIG_FILE
        )));
    }

    persist(ctx.project(), ctx.labels(), extraction)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::adapters::{EmbeddedServiceCatalog, EmbeddedTemplates, default_label_table};
    use crate::domain::GroupingEvent;
    use crate::domain::paths::MAPPINGS_FILE;
    use crate::testing::{MockProjectFs, TestFiles};

    type TestContext = AppContext<MockProjectFs, EmbeddedServiceCatalog, EmbeddedTemplates>;

    fn context(files: &TestFiles) -> TestContext {
        AppContext::new(
            MockProjectFs::new(files.clone()),
            EmbeddedServiceCatalog::new().unwrap(),
            EmbeddedTemplates::new().unwrap(),
            default_label_table().unwrap(),
        )
    }

    fn redis_configuration() -> ServiceConfiguration {
        ServiceConfiguration::from_value(json!({
            "redis": { "uri": "redis://h:1234", "serviceInfo": { "name": "my-redis-db" } }
        }))
        .unwrap()
    }

    #[test]
    fn regroups_seeded_store_and_drops_unrecognized_keys() {
        let files = TestFiles::new();
        files.add(
            LOCALDEV_CONFIG_FILE,
            r#"{ "redis_uri": "redis://h:1234", "legacy_token": "abc123" }"#,
        );
        let ctx = context(&files);

        let finalized = execute(&ctx, &redis_configuration()).unwrap();

        assert_eq!(
            finalized.extraction.trace.last(),
            Some(&GroupingEvent::Unrecognized { key: "legacy_token".to_string() })
        );
        assert_eq!(
            files.json(LOCALDEV_CONFIG_FILE),
            json!({ "my-redis-db": { "uri": "redis://h:1234" } })
        );
        assert!(files.json(MAPPINGS_FILE).get("redis").is_some());
    }

    #[test]
    fn refuses_to_rewrite_grouped_store() {
        let files = TestFiles::new();
        let grouped = r#"{ "my-redis-db": { "uri": "redis://h:1234" } }"#;
        files.add(LOCALDEV_CONFIG_FILE, grouped);
        let ctx = context(&files);

        let result = execute(&ctx, &redis_configuration());

        assert!(matches!(result, Err(AppError::Configuration(_))));
        assert_eq!(files.get(LOCALDEV_CONFIG_FILE).as_deref(), Some(grouped));
        assert!(files.get(MAPPINGS_FILE).is_none());
    }

    #[test]
    fn missing_store_is_an_error() {
        let files = TestFiles::new();
        let ctx = context(&files);

        assert!(matches!(
            execute(&ctx, &redis_configuration()),
            Err(AppError::Configuration(ref m)) if m.contains("nothing to remap")
        ));
    }

    #[test]
    fn empty_store_writes_empty_outputs() {
        let files = TestFiles::new();
        files.add(LOCALDEV_CONFIG_FILE, "{}");
        let ctx = context(&files);

        let finalized = execute(&ctx, &redis_configuration()).unwrap();

        assert!(finalized.extraction.credentials.is_empty());
        assert_eq!(files.json(MAPPINGS_FILE), json!({}));
    }
}
