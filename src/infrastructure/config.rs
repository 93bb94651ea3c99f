use crate::domain::receiver::ReceiverFileGroup;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    /// Base directory for relative receiver file paths
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub receivers: Vec<ReceiverConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReceiverConfig {
    pub name: String,
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

impl AppConfig {
    /// Receiver groups in declared order, with paths resolved against `data_dir`
    pub fn receiver_groups(&self) -> anyhow::Result<Vec<ReceiverFileGroup>> {
        if self.receivers.is_empty() {
            anyhow::bail!("no receivers configured");
        }

        let mut names = HashSet::new();
        let mut groups = Vec::with_capacity(self.receivers.len());

        for receiver in &self.receivers {
            if !names.insert(receiver.name.as_str()) {
                anyhow::bail!("receiver {} is configured more than once", receiver.name);
            }
            if receiver.files.is_empty() {
                anyhow::bail!("receiver {} has no files", receiver.name);
            }

            let files = receiver
                .files
                .iter()
                .map(|f| match &self.data_dir {
                    Some(dir) if f.is_relative() => dir.join(f),
                    _ => f.clone(),
                })
                .collect();

            groups.push(ReceiverFileGroup::new(receiver.name.clone(), files));
        }

        Ok(groups)
    }
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?)
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = builder()?
        .add_source(config::File::with_name("config/receivers"))
        .set_override_option("server.port", std::env::var("PORT").ok())?
        .build()
        .context("Failed to load config/receivers")?;

    Ok(settings.try_deserialize()?)
}
