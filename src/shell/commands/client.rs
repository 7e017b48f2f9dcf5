//! Client commands - add, list, delete, import and export.

use crate::{
    core::{client, export, validation},
    errors::Result,
    shell::{
        ShellData,
        args::{ClientAction, ExportFormat},
        render,
    },
};
use std::{fs::File, io::Write, path::Path};

/// Runs a client action.
pub async fn run(data: &ShellData, action: ClientAction, out: &mut dyn Write) -> Result<()> {
    match action {
        ClientAction::Add {
            name,
            email,
            phone,
            address,
        } => add(data, &name, &email, &phone, &address, out).await,
        ClientAction::List { search } => list(data, search.as_deref(), out).await,
        ClientAction::Delete { name } => delete(data, &name, out).await,
        ClientAction::Import { path } => import(data, &path, out).await,
        ClientAction::Export {
            path,
            format,
            search,
        } => export_clients(data, &path, format, search.as_deref(), out).await,
    }
}

async fn add(
    data: &ShellData,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let new_client = validation::validate_client(name, email, phone, address)?;
    let saved = client::save_client(&data.database, new_client).await?;
    writeln!(out, "Client {} added", saved.name)?;
    Ok(())
}

async fn list(data: &ShellData, search: Option<&str>, out: &mut dyn Write) -> Result<()> {
    let clients = client::load_clients(&data.database).await?;
    if clients.is_empty() {
        writeln!(out, "No clients")?;
        return Ok(());
    }

    let shown = client::filter_clients(&clients, search.unwrap_or_default());
    if shown.is_empty() {
        writeln!(out, "No clients match the search")?;
        return Ok(());
    }
    write!(out, "{}", render::render_clients(&shown))?;
    Ok(())
}

async fn delete(data: &ShellData, name: &str, out: &mut dyn Write) -> Result<()> {
    let removed = client::delete_client_by_name(&data.database, name).await?;
    if removed == 0 {
        writeln!(out, "No client named \"{name}\"")?;
    } else {
        writeln!(out, "Client \"{name}\" deleted")?;
    }
    Ok(())
}

async fn import(data: &ShellData, path: &Path, out: &mut dyn Write) -> Result<()> {
    let file = File::open(path)?;
    let clients = export::read_clients_csv(file)?;
    let imported = client::import_clients(&data.database, clients).await?;
    writeln!(out, "Imported clients: {imported}")?;
    Ok(())
}

async fn export_clients(
    data: &ShellData,
    path: &Path,
    format: ExportFormat,
    search: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let clients = client::load_clients(&data.database).await?;
    let selected = client::filter_clients(&clients, search.unwrap_or_default());

    let file = File::create(path)?;
    let written = match format {
        ExportFormat::Csv => export::write_clients_csv(&selected, file)?,
        ExportFormat::Json => export::write_clients_json(&selected, file)?,
    };
    tracing::info!(path = %path.display(), written, "Clients exported");
    writeln!(out, "Saved {written} clients to {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        errors::Error,
        shell::commands::testing::{shell_data, text},
        test_utils::create_test_client,
    };
    use std::path::PathBuf;

    fn temp_path(file_name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("order-desk-{}-{file_name}", std::process::id()))
    }

    #[tokio::test]
    async fn test_add_client() -> Result<()> {
        let data = shell_data().await?;
        let mut out = Vec::new();

        let action = ClientAction::Add {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: "+1234567890".to_string(),
            address: "Wonderland".to_string(),
        };
        run(&data, action, &mut out).await?;

        assert_eq!(text(out), "Client Alice added\n");
        assert_eq!(client::load_clients(&data.database).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_client_reports_all_violations() -> Result<()> {
        let data = shell_data().await?;
        let mut out = Vec::new();

        let action = ClientAction::Add {
            name: String::new(),
            email: "nope".to_string(),
            phone: "+1234567890".to_string(),
            address: String::new(),
        };
        let result = run(&data, action, &mut out).await;

        match result {
            Err(Error::Validation { errors }) => {
                assert_eq!(errors, vec!["Name is required", "Invalid email", "Invalid address"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(client::load_clients(&data.database).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_list_and_search() -> Result<()> {
        let data = shell_data().await?;
        create_test_client(&data.database, "Alice").await?;
        create_test_client(&data.database, "Bob").await?;

        let mut out = Vec::new();
        run(&data, ClientAction::List { search: None }, &mut out).await?;
        let listing = text(out);
        assert_eq!(listing.lines().count(), 3);
        assert!(listing.contains("bob@example.com"));

        let mut out = Vec::new();
        let action = ClientAction::List {
            search: Some("BOB".to_string()),
        };
        run(&data, action, &mut out).await?;
        let listing = text(out);
        assert_eq!(listing.lines().count(), 2);
        assert!(!listing.contains("Alice"));
        Ok(())
    }

    #[tokio::test]
    async fn test_list_empty() -> Result<()> {
        let data = shell_data().await?;
        let mut out = Vec::new();
        run(&data, ClientAction::List { search: None }, &mut out).await?;
        assert_eq!(text(out), "No clients\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_client() -> Result<()> {
        let data = shell_data().await?;
        create_test_client(&data.database, "Alice").await?;

        let mut out = Vec::new();
        let action = ClientAction::Delete {
            name: "Alice".to_string(),
        };
        run(&data, action, &mut out).await?;
        assert_eq!(text(out), "Client \"Alice\" deleted\n");

        let mut out = Vec::new();
        let action = ClientAction::Delete {
            name: "Alice".to_string(),
        };
        run(&data, action, &mut out).await?;
        assert_eq!(text(out), "No client named \"Alice\"\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_import_then_export_json() -> Result<()> {
        let data = shell_data().await?;
        let csv_path = temp_path("import.csv");
        std::fs::write(
            &csv_path,
            "name,email,phone,address\nAlice,alice@example.com,+1234567890,Wonderland\n,,,\n",
        )?;

        let mut out = Vec::new();
        let action = ClientAction::Import {
            path: csv_path.clone(),
        };
        run(&data, action, &mut out).await?;
        assert_eq!(text(out), "Imported clients: 1\n");

        let json_path = temp_path("clients.json");
        let mut out = Vec::new();
        let action = ClientAction::Export {
            path: json_path.clone(),
            format: ExportFormat::Json,
            search: None,
        };
        run(&data, action, &mut out).await?;

        let exported: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path)?)?;
        assert_eq!(exported[0]["name"], "Alice");

        std::fs::remove_file(csv_path)?;
        std::fs::remove_file(json_path)?;
        Ok(())
    }

    #[tokio::test]
    async fn test_import_missing_file() -> Result<()> {
        let data = shell_data().await?;
        let mut out = Vec::new();
        let action = ClientAction::Import {
            path: temp_path("does-not-exist.csv"),
        };
        let result = run(&data, action, &mut out).await;
        assert!(matches!(result, Err(Error::Io(_))));
        Ok(())
    }
}
