//! Journalisation (stderr) : la sortie standard reste réservée aux résultats.
//!
//! `RUST_LOG` a priorité ; sinon le niveau vient du nombre de `-v`.

use tracing_subscriber::EnvFilter;

fn niveau(verbeux: u8) -> &'static str {
    match verbeux {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn initialiser(verbeux: u8) -> anyhow::Result<()> {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), niveau(verbeux)))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("initialisation des journaux : {e}"))
}
