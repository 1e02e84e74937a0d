// src/main.rs
//
// Calculatrice lignes : point d’entrée
// ------------------------------------
// But:
// - lire un fichier d’expressions (une par ligne, défaut: input01.txt)
// - écrire un résultat exact ("n" ou "n/d") ou un diagnostic par ligne
// - journaux sur stderr, résultats sur stdout

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

mod app;
mod journal;
mod noyau;

use app::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    journal::initialiser(config.verbeux)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        fichier = %config.fichier.display(),
        "démarrage"
    );

    let stdout = io::stdout();
    let mut sortie = stdout.lock();
    app::executer(&config, &mut sortie)?;
    sortie.flush().context("vidage de la sortie standard")?;
    Ok(())
}
