//! DynamoDB infrastructure management commands.

mod error;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;
use dynoserv::storage::dynamodb::table::{
    self, AttributeType, DeployPlan, DestroyPlan, TableConfig,
};
use dynoserv::storage::dynamodb::create_client;
use dynoserv::Config;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy the DynamoDB table.
    Deploy(DeployCommand),
}

/// Deploy or destroy the service table.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy the DynamoDB table backing a dynoserv service.

By default, this command creates the table with the configured hash key
(and optional range key) using on-demand billing. Key attributes are
strings unless --hash-key-type/--range-key-type say otherwise; ids written
through the service must match the declared types. Existing tables are
left untouched.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL     - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION           - AWS region (defaults to us-east-1)
  AWS_PROFILE          - AWS profile to use for credentials
  DYNAMODB_TABLE_NAME  - Default table name
  DYNAMODB_ID_FIELD    - Default hash key attribute
  DYNAMODB_RANGE_KEY   - Default range key attribute")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating it.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use.
    #[arg(long)]
    pub table_name: Option<String>,

    /// Hash key attribute name.
    #[arg(long)]
    pub hash_key: Option<String>,

    /// Range key attribute name.
    #[arg(long)]
    pub range_key: Option<String>,

    /// Type of the hash key attribute.
    #[arg(long, value_enum, default_value_t = KeyType::String)]
    pub hash_key_type: KeyType,

    /// Type of the range key attribute.
    #[arg(long, value_enum, default_value_t = KeyType::String)]
    pub range_key_type: KeyType,
}

/// Key attribute types accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KeyType {
    String,
    Number,
}

impl From<KeyType> for AttributeType {
    fn from(key_type: KeyType) -> Self {
        match key_type {
            KeyType::String => AttributeType::String,
            KeyType::Number => AttributeType::Number,
        }
    }
}

impl DeployCommand {
    /// Applies command-line overrides on top of the environment config.
    fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(name) = &self.table_name {
            config.table_name = name.clone();
        }
        if let Some(hash_key) = &self.hash_key {
            config.id_field = hash_key.clone();
        }
        if let Some(range_key) = &self.range_key {
            config.range_key = Some(range_key.clone());
        }
        config
    }
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let config = cmd.config();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), config.target_display());
        aprintln!();
    }

    let client = create_client(&config).await;
    let current_state = table::describe_table(&client, &config.table_name).await?;
    tracing::debug!(table = %config.table_name, state = ?current_state, "Described table");

    if cmd.destroy {
        let plan = table::calculate_destroy_plan(current_state.as_ref(), &config.table_name);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in table::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if matches!(plan, DestroyPlan::AlreadyGone { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        confirm(
            cmd.force,
            "Are you sure you want to delete this table? ALL DATA WILL BE LOST",
            false,
        )?;

        if !global.is_silent() {
            aprintln!("{}", p_b("Deleting table..."));
        }

        table::execute_destroy_plan(&client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table destroyed successfully."));
        }
    } else {
        let desired = TableConfig::from_config(&config)
            .with_hash_key_type(cmd.hash_key_type.into())
            .with_range_key_type(cmd.range_key_type.into());
        let plan = table::calculate_deploy_plan(current_state.as_ref(), &desired);

        if !global.is_silent() {
            aprintln!("{}", p_c("Deploy Plan:"));
            for line in table::format_deploy_plan(&plan) {
                if line.starts_with('+') {
                    aprintln!("  {}", p_g(&line));
                } else {
                    aprintln!("  {}", line);
                }
            }
            aprintln!();
        }

        if matches!(plan, DeployPlan::NoChanges { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Infrastructure is up to date."));
            }
            return Ok(());
        }

        confirm(cmd.force, "Apply these changes?", true)?;

        if !global.is_silent() {
            aprintln!("{}", p_b("Creating table..."));
        }

        table::execute_deploy_plan(&client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Infrastructure deployed successfully."));
        }
    }

    Ok(())
}

fn confirm(force: bool, prompt: &str, default: bool) -> Result<()> {
    if force {
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    if confirmed {
        Ok(())
    } else {
        Err(DynamodbError::UserCancelled)
    }
}
