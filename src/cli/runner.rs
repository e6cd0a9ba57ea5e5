//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::pipeline::Pipeline;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Run {
                endpoint,
                output,
                skip_upload,
            } => {
                self.run_pipeline(endpoint.as_deref(), output.as_deref(), *skip_upload)
                    .await
            }
            Commands::Validate => self.validate(),
            Commands::ShowConfig => self.show_config(),
        }
    }

    /// Load configuration from the file flag, or fall back to defaults
    fn load_config(&self) -> Result<PipelineConfig> {
        match &self.cli.config {
            Some(path) => PipelineConfig::from_file(path),
            None => Ok(PipelineConfig::default()),
        }
    }

    /// Execute the pipeline
    async fn run_pipeline(
        &self,
        endpoint: Option<&str>,
        output: Option<&str>,
        skip_upload: bool,
    ) -> Result<()> {
        let mut config = self.load_config()?;

        if let Some(endpoint) = endpoint {
            config.endpoint = endpoint.to_string();
        }
        if let Some(output) = output {
            config.destination = output.to_string();
        }

        let pipeline = Pipeline::new(config)?.skip_upload(skip_upload);
        let report = pipeline.run().await?;

        println!("{}", report.summary());
        println!("Process completed successfully!");
        Ok(())
    }

    /// Validate the configuration file
    fn validate(&self) -> Result<()> {
        let config = self.load_config()?;
        config.validate()?;
        println!("Configuration is valid");
        Ok(())
    }

    /// Print the effective configuration
    fn show_config(&self) -> Result<()> {
        let config = self.load_config()?;
        let yaml = serde_yaml::to_string(&config)?;
        print!("{yaml}");
        Ok(())
    }
}
