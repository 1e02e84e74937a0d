//! Noyau exact
//!
//! Organisation interne :
//! - rationnel.rs : rationnel exact, toujours réduit
//! - jetons.rs    : découpage + classification (nombre / opérateur / non reconnu)
//! - rpn.rs       : shunting-yard + évaluation RPN
//! - format.rs    : affichage "n" ou "n/d", jetons en texte
//! - erreur.rs    : erreurs du noyau
//! - eval.rs      : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rationnel;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use eval::eval_expression;
