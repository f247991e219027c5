//! `load-stores` command: replace the demo store dataset behind the map view.

use std::path::Path;

use promopanda_core::{load_store_locations, AppConfig, ConfigError};
use promopanda_scraper::{ApiClient, SubmitOutcome};

use crate::success_line;

/// Reads the store locations file and posts it verbatim.
///
/// A missing or malformed file is reported and the command ends without
/// sending anything.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be built.
pub(crate) async fn run_load_stores(
    config: &AppConfig,
    file_override: Option<&Path>,
) -> anyhow::Result<()> {
    let path = file_override.unwrap_or(&config.stores_path);

    let stores = match load_store_locations(path) {
        Ok(stores) => stores,
        Err(ConfigError::StoresFileIo {
            path: shown,
            source,
        }) if source.kind() == std::io::ErrorKind::NotFound => {
            println!("❌ Error: Archivo {shown} no encontrado.");
            return Ok(());
        }
        Err(e) => {
            println!("❌ Error: {e}");
            return Ok(());
        }
    };

    for store in &stores {
        tracing::debug!(
            name = store.name().unwrap_or("?"),
            store = store.store().unwrap_or("?"),
            "queued store location"
        );
    }

    println!(
        "Enviando {} tiendas a la API: {}",
        stores.len(),
        config.stores_endpoint
    );

    let client = ApiClient::new(config.request_timeout(), None)?;
    match client
        .replace_store_locations(&config.stores_endpoint, &stores)
        .await
    {
        Ok(SubmitOutcome::Accepted { message, .. }) => {
            println!("{}", success_line(message.as_deref()));
            println!("\n¡Datos del mapa cargados!");
        }
        Ok(SubmitOutcome::Skipped) => {
            println!("El archivo no contiene tiendas; no se envió nada.");
        }
        Err(e) => {
            tracing::error!(error = %e, "store location upload failed");
            println!("❌ Error en la petición a la API: {e}");
        }
    }

    Ok(())
}
