// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Jeton (infixe) en RPN (postfix)
// - Puis évaluer la RPN sur une pile de Rationnel
//
// Règles:
// - pas de parenthèses : tout jeton non reconnu est ignoré (ni sortie, ni pile)
// - associativité à gauche : à précédence égale, l’opérateur déjà empilé sort d’abord

use tracing::trace;

use super::erreur::{ErreurNoyau, MotifInvalide, Result};
use super::jetons::{Jeton, Operateur};
use super::rationnel::Rationnel;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [3, +, 4, *, 2]
///   rpn:    [3, 4, 2, *, +]
pub fn vers_rpn(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    // La pile ne contient que des opérateurs : aucune marque de groupement n’y entre.
    let mut ops: Vec<Operateur> = Vec::new();

    for jeton in jetons {
        match jeton {
            Jeton::Nombre(_) => out.push(jeton.clone()),

            Jeton::Operateur(op) => {
                while let Some(&sommet) = ops.last() {
                    if sommet.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    out.push(Jeton::Operateur(sommet));
                }
                ops.push(*op);
            }

            Jeton::NonReconnu(t) => trace!(jeton = %t, "jeton ignoré"),
        }
    }

    // vide la pile ops (LIFO)
    out.extend(ops.into_iter().rev().map(Jeton::Operateur));
    out
}

fn appliquer(op: Operateur, a: &Rationnel, b: &Rationnel) -> Result<Rationnel> {
    match op {
        Operateur::Plus => Ok(a.additionner(b)),
        Operateur::Moins => Ok(a.soustraire(b)),
        Operateur::Fois => Ok(a.multiplier(b)),
        Operateur::Divise => a.diviser(b),
    }
}

/// Évalue une RPN.
///
/// - Nombre    : analysé puis empilé (ErreurNoyau::Analyse remonte telle quelle)
/// - Opérateur : dépile b (droite) puis a (gauche), empile a OP b
/// - fin       : la pile doit contenir exactement une valeur
pub fn evaluer_rpn(rpn: &[Jeton]) -> Result<Rationnel> {
    let mut pile: Vec<Rationnel> = Vec::new();

    for jeton in rpn {
        match jeton {
            Jeton::Nombre(t) => pile.push(t.parse()?),

            Jeton::Operateur(op) => {
                let b = pile.pop().ok_or(MotifInvalide::Operandes)?;
                let a = pile.pop().ok_or(MotifInvalide::Operandes)?;

                let v = appliquer(*op, &a, &b).map_err(|e| match e {
                    ErreurNoyau::DivisionParZero => {
                        ErreurNoyau::from(MotifInvalide::DivisionParZero)
                    }
                    autre => autre,
                })?;
                pile.push(v);
            }

            Jeton::NonReconnu(t) => return Err(MotifInvalide::JetonInattendu(t.clone()).into()),
        }
    }

    if pile.len() != 1 {
        return Err(MotifInvalide::PileFinale.into());
    }
    pile.pop().ok_or_else(|| MotifInvalide::PileFinale.into())
}
