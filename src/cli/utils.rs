use serde_json::{json, Value};
use std::fmt::Write as _;

use crate::cli::OutputFormat;
use crate::hierarchy::HierarchyNode;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(data_value) = data {
                response["data"] = data_value;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(
    output_format: &OutputFormat,
    message: &str,
    error_code: Option<&str>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(code) = error_code {
                response["error_code"] = json!(code);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Render hierarchy roots as an indented outline, one employee per line
pub fn render_tree(roots: &[HierarchyNode]) -> String {
    let mut out = String::new();
    for root in roots {
        render_node(&mut out, root, 0);
    }
    out
}

fn render_node(out: &mut String, node: &HierarchyNode, indent: usize) {
    let _ = writeln!(
        out,
        "{}{} #{} ({} / position {})",
        "  ".repeat(indent),
        node.name,
        node.id,
        node.position_name,
        node.position_id
    );
    for child in node.child.iter().flatten() {
        render_node(out, child, indent + 1);
    }
}
