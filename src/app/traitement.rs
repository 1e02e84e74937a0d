//! src/app/traitement.rs
//!
//! Boucle ligne à ligne : une ligne non vide => une ligne de sortie.
//!
//! Contrats :
//! - une erreur d’expression est affichée puis on passe à la ligne suivante
//! - une erreur de LECTURE arrête tout (remontée à l’appelant)
//! - les lignes vides (après trim) ne produisent rien

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use super::source::ErreurSource;
use crate::noyau::eval_expression;

/// Préfixe des erreurs par ligne.
pub const PREFIXE_EXPRESSION: &str = "Erreur dans l’expression";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bilan {
    pub lignes: usize,
    pub resultats: usize,
    pub erreurs: usize,
}

#[derive(Debug, Error)]
pub enum ErreurTraitement {
    #[error(transparent)]
    Source(#[from] ErreurSource),

    #[error("écriture impossible sur la sortie : {0}")]
    Ecriture(#[source] io::Error),
}

/// Texte de sortie d’une ligne, `None` si la ligne est vide.
/// Le booléen indique un succès.
pub fn traiter_ligne(ligne: &str) -> Option<(String, bool)> {
    let ligne = ligne.trim();
    if ligne.is_empty() {
        return None;
    }

    Some(match eval_expression(ligne) {
        Ok(r) => {
            debug!(entier = r.est_entier(), "résultat {r}");
            (r.to_string(), true)
        }
        Err(e) => {
            debug!(erreur = %e, "expression refusée");
            (format!("{PREFIXE_EXPRESSION} : {e}"), false)
        }
    })
}

pub fn traiter_lignes<R, W>(source: R, sortie: &mut W) -> Result<Bilan, ErreurTraitement>
where
    R: BufRead,
    W: Write,
{
    let mut bilan = Bilan::default();

    for bloc in source.lines() {
        let bloc = bloc.map_err(ErreurSource::Lecture)?;

        // un '\r' isolé termine aussi une ligne ("\r\n" est déjà retiré par lines())
        for ligne in bloc.split('\r') {
            bilan.lignes += 1;

            let Some((texte, ok)) = traiter_ligne(ligne) else {
                continue;
            };
            if ok {
                bilan.resultats += 1;
            } else {
                bilan.erreurs += 1;
            }
            writeln!(sortie, "{texte}").map_err(ErreurTraitement::Ecriture)?;
        }
    }

    Ok(bilan)
}
