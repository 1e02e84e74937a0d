//! Noyau : évaluation (pipeline réel)
//!
//! ligne -> jetons -> RPN -> Rationnel
//!
//! Chaque ligne est indépendante : aucune pile ne survit à l’appel.

use tracing::debug;

use super::erreur::Result;
use super::format::format_jetons;
use super::jetons::decouper;
use super::rationnel::Rationnel;
use super::rpn::{evaluer_rpn, vers_rpn};

/// API publique : évalue une expression infixe (jetons séparés par des blancs).
pub fn eval_expression(ligne: &str) -> Result<Rationnel> {
    // 1) Jetons
    let jetons = decouper(ligne);

    // 2) RPN
    let rpn = vers_rpn(&jetons);
    debug!(
        jetons = %format_jetons(&jetons),
        rpn = %format_jetons(&rpn),
        "expression transformée"
    );

    // 3) Valeur
    evaluer_rpn(&rpn)
}
