use clap::Subcommand;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_success, render_tree};
use crate::cli::OutputFormat;
use crate::hierarchy::{CreateEmployee, CreatedEmployee, HierarchyNode};

#[derive(Subcommand)]
pub enum EmployeeCommands {
    #[command(about = "Create an employee, optionally under an existing parent")]
    Create {
        #[arg(long, help = "Employee name")]
        name: String,
        #[arg(long, help = "Position id (grouping key, not unique)")]
        position_id: i32,
        #[arg(long, help = "Human-readable position name")]
        position_name: String,
        #[arg(long, help = "Parent employee id; omit for a top-level employee")]
        parent_id: Option<i32>,
    },

    #[command(about = "Show the nested hierarchy under every employee with a position")]
    Hierarchy {
        #[arg(help = "Position id")]
        position_id: i32,
    },
}

pub async fn handle(cmd: EmployeeCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        EmployeeCommands::Create { name, position_id, position_name, parent_id } => {
            let input = CreateEmployee { name, position_id, position_name, parent_id };
            let created: CreatedEmployee = client.post("employees/create", &input).await?;
            let user = &created.data.user;

            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&created)?),
                OutputFormat::Text => {
                    output_success(&output_format, &created.message, None)?;
                    println!(
                        "{} #{} ({} / position {}) parent: {}",
                        user.name,
                        user.id,
                        user.position_name,
                        user.position_id,
                        user.parent_id.map(|id| format!("#{id}")).unwrap_or_else(|| "none".to_string())
                    );
                }
            }
            Ok(())
        }
        EmployeeCommands::Hierarchy { position_id } => {
            let roots: Vec<HierarchyNode> = client
                .post("employees/hierarchy", &json!({ "id": position_id }))
                .await?;

            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&roots)?),
                OutputFormat::Text => print!("{}", render_tree(&roots)),
            }
            Ok(())
        }
    }
}
