//! Tool discovery command

use anyhow::Result;
use tabled::Tabled;

use crate::client::ToolClient;
use crate::output::{print_warning, OutputFormat};

/// Row for the tool listing table
#[derive(Tabled)]
struct ToolRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Parameters")]
    parameters: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// List the tools registered on the server
pub async fn list_tools(client: &ToolClient, format: OutputFormat) -> Result<()> {
    let tools = client.list_tools().await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&tools)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if tools.is_empty() {
                print_warning("No tools registered");
                return Ok(());
            }

            let rows: Vec<ToolRow> = tools
                .iter()
                .map(|t| ToolRow {
                    name: t.name.clone(),
                    parameters: t.parameters.join(", "),
                    description: t.description.clone(),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
        }
    }

    Ok(())
}
