//! CLI runner - executes commands

use crate::builtin::{get_builtin, list_builtin};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Error, Result};
use crate::loader::{load_schema, load_schema_from_str};
use crate::schema::{Schema, SchemaValidator};
use crate::validator::StringValidator;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tracing::info;

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
            Commands::Validate {
                schema,
                config,
                config_json,
            } => self.validate(schema, config.as_deref(), config_json.as_deref()),
            Commands::Check { schema } => self.check(schema),
            Commands::Describe { schema } => self.describe(schema),
            Commands::List => self.list_schemas(),
            Commands::Serve { port, schemas_dir } => {
                let config = crate::cli::ServerConfig {
                    schemas_dir: schemas_dir.clone(),
                };
                crate::cli::serve(config, *port).await
            }
        }
    }

    /// Load configuration JSON
    fn load_config(&self, path: Option<&Path>, inline: Option<&str>) -> Result<Value> {
        // Inline config takes precedence
        if let Some(json_str) = inline {
            return serde_json::from_str(json_str)
                .map_err(|e| Error::config(format!("Invalid config JSON: {e}")));
        }

        let path = path.ok_or_else(|| {
            Error::config("Configuration not specified (use --config or --config-json)")
        })?;
        let content = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {e}")))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::config(format!("Invalid config JSON: {e}")))
    }

    /// Validate a configuration
    fn validate(&self, schema: &str, config: Option<&Path>, config_json: Option<&str>) -> Result<()> {
        let schema = load_schema(schema)?;
        let json = self.load_config(config, config_json)?;
        let config = schema.decode(&json)?;

        let diagnostics = SchemaValidator::new(&schema).validate(&config);
        info!(
            schema = %schema.name,
            errors = diagnostics.error_count(),
            "Validation finished"
        );

        let error_count = diagnostics.error_count();
        match self.cli.format {
            OutputFormat::Json => self.output_message(&json!({
                "type": "DIAGNOSTICS",
                "schema": schema.name,
                "valid": error_count == 0,
                "diagnostics": diagnostics
            })),
            OutputFormat::Pretty => {
                if diagnostics.is_empty() {
                    println!("Configuration is valid for '{}'", schema.name);
                }
                for diagnostic in &diagnostics {
                    println!("{diagnostic}");
                }
            }
        }

        if error_count > 0 {
            return Err(Error::ValidationFailed { count: error_count });
        }
        Ok(())
    }

    /// Check a schema definition
    fn check(&self, schema: &str) -> Result<()> {
        let schema = load_schema(schema)?;
        let discriminators = SchemaValidator::new(&schema).discriminators().len();

        self.output_message(&json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!(
                    "Schema '{}' is valid with {} attributes and {} discriminators",
                    schema.name,
                    schema.root.attributes.len(),
                    discriminators
                )
            }
        }));

        Ok(())
    }

    /// Describe enforced discriminators
    fn describe(&self, schema: &str) -> Result<()> {
        let schema = load_schema(schema)?;
        let validator = SchemaValidator::new(&schema);

        match self.cli.format {
            OutputFormat::Json => {
                let discriminators: Vec<Value> = validator
                    .discriminators()
                    .into_iter()
                    .map(|(location, discriminator)| {
                        json!({
                            "path": location,
                            "description": discriminator.description(),
                            "mapping": discriminator.definition().mapping
                        })
                    })
                    .collect();

                self.output_message(&json!({
                    "type": "SCHEMA",
                    "name": schema.name,
                    "description": schema.description,
                    "discriminators": discriminators
                }));
            }
            OutputFormat::Pretty => {
                println!("# {}", schema.name);
                if let Some(description) = &schema.description {
                    println!("\n{description}");
                }
                for (location, discriminator) in validator.discriminators() {
                    println!("\n## `{location}`\n");
                    println!("{}", discriminator.markdown_description());
                }
            }
        }

        Ok(())
    }

    /// List built-in schemas
    fn list_schemas(&self) -> Result<()> {
        let schemas = list_builtin()
            .into_iter()
            .map(|name| {
                let yaml = get_builtin(name)
                    .ok_or_else(|| Error::schema_not_found(name))?;
                let schema: Schema = load_schema_from_str(yaml)?;
                Ok(json!({
                    "name": schema.name,
                    "description": schema.description
                }))
            })
            .collect::<Result<Vec<Value>>>()?;

        self.output_message(&json!({
            "type": "SCHEMAS",
            "schemas": schemas
        }));

        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
