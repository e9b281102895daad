//! CLI route: run context and command dispatch.

use crate::cli::output::{render_json, render_schema};
use crate::cli::parse::{Commands, ShowSource};
use crate::config::sources::database::decode_value;
use crate::config::{ConfigLoader, EnvSource, ProcessEnv, StaticTemplates, ENV_VAR_SCHEMA};
use crate::error::LoadError;
use crate::settings::Settings;
use crate::store::{PersistedConfigRow, SledConfigStore};
use tracing::{debug, info};

/// Runtime context for CLI execution: settings, store and templates.
pub struct RunContext {
    settings: Settings,
    loader: ConfigLoader<SledConfigStore, StaticTemplates>,
}

impl RunContext {
    /// Open the store and read the templates named by `settings`.
    pub fn new(settings: Settings) -> Result<Self, LoadError> {
        let store = SledConfigStore::new(&settings.store_path)?;
        let templates = match settings.templates_path {
            Some(ref path) => StaticTemplates::from_json_file(path)?,
            None => StaticTemplates::default(),
        };
        debug!(
            store_path = %settings.store_path.display(),
            templates = ?settings.templates_path,
            "Run context initialized"
        );

        Ok(Self {
            settings,
            loader: ConfigLoader::new(store, templates),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Execute a command and return its printable output.
    pub async fn execute(&self, command: &Commands) -> Result<String, LoadError> {
        match command {
            Commands::Show { source } => self.handle_show(*source).await,
            Commands::Schema { value_type } => {
                Ok(render_schema(ENV_VAR_SCHEMA, *value_type, |name| {
                    ProcessEnv.var_os(name).is_some()
                }))
            }
            Commands::Set {
                namespace,
                key,
                value,
            } => self.handle_set(namespace, key, value),
            Commands::Unset { namespace, key } => self.handle_unset(namespace, key),
        }
    }

    async fn handle_show(&self, source: ShowSource) -> Result<String, LoadError> {
        match source {
            ShowSource::All => render_json(&self.loader.load().await?),
            ShowSource::Db => render_json(&self.loader.load().await?.from_db),
            ShowSource::Env => render_json(&self.loader.load_from_env_vars()),
        }
    }

    fn handle_set(&self, namespace: &str, key: &str, value: &str) -> Result<String, LoadError> {
        let row = PersistedConfigRow::new(namespace, key, value);
        let decoded = decode_value(&row)?;

        let store = self.loader.store();
        store.put(&row)?;
        store.flush()?;

        info!(namespace, key, "Stored config row");
        Ok(format!("{}/{} = {}", namespace, key, decoded))
    }

    fn handle_unset(&self, namespace: &str, key: &str) -> Result<String, LoadError> {
        let store = self.loader.store();
        let existed = store.remove(namespace, key)?;
        store.flush()?;

        if existed {
            info!(namespace, key, "Removed config row");
            Ok(format!("Removed {}/{}", namespace, key))
        } else {
            Ok(format!("No stored value for {}/{}", namespace, key))
        }
    }
}
