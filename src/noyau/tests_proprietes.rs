//! Propriétés du rationnel et du pipeline, sur des tables de cas manuelles.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

use super::erreur::ErreurNoyau;
use super::rationnel::Rationnel;

const PAIRES: &[(i64, i64)] = &[
    (0, 1),
    (0, -5),
    (1, 1),
    (1, -1),
    (2, 4),
    (-2, 4),
    (6, -9),
    (-12, -18),
    (7, 3),
    (100, 250),
    (-1000, 7),
    (123456, -654321),
    (i64::MAX, 2),
    (i64::MIN, -4),
];

fn rationnels() -> Vec<Rationnel> {
    PAIRES
        .iter()
        .map(|&(n, d)| Rationnel::new(n, d).unwrap())
        .collect()
}

#[test]
fn prop_construction_canonique() {
    for &(n, d) in PAIRES {
        let r = Rationnel::new(n, d).unwrap();
        assert!(r.denom().is_positive(), "dénominateur positif pour {n}/{d}");

        // forme réduite <=> déjà égale à sa propre réduction
        let brut = BigRational::new_raw(r.numer().clone(), r.denom().clone());
        let reduit = brut.reduced();
        assert_eq!(reduit.numer(), brut.numer(), "pgcd == 1 pour {n}/{d}");
        assert_eq!(reduit.denom(), brut.denom(), "pgcd == 1 pour {n}/{d}");

        // même valeur que n/d
        assert_eq!(
            r.numer() * BigInt::from(d),
            BigInt::from(n) * r.denom(),
            "valeur conservée pour {n}/{d}"
        );
    }
}

#[test]
fn prop_aller_retour_texte() {
    for r in rationnels() {
        let texte = r.to_string();
        assert_eq!(texte.parse::<Rationnel>().unwrap(), r, "aller-retour {texte}");
    }
}

#[test]
fn prop_commutativite() {
    let rs = rationnels();
    for a in &rs {
        for b in &rs {
            assert_eq!(a.additionner(b), b.additionner(a), "{a} + {b}");
            assert_eq!(a.multiplier(b), b.multiplier(a), "{a} * {b}");
        }
    }
}

#[test]
fn prop_soustraction_par_oppose() {
    let moins_un = Rationnel::new(-1, 1).unwrap();
    let rs = rationnels();
    for a in &rs {
        for b in &rs {
            assert_eq!(
                a.soustraire(b),
                a.additionner(b.multiplier(&moins_un)),
                "{a} - {b}"
            );
        }
    }
}

#[test]
fn prop_division_echoue_ssi_numerateur_nul() {
    let rs = rationnels();
    for a in &rs {
        for b in &rs {
            match a.diviser(b) {
                Err(e) => {
                    assert_eq!(e, ErreurNoyau::DivisionParZero);
                    assert!(b.est_zero(), "{a} / {b} ne devrait pas échouer");
                }
                Ok(q) => {
                    assert!(!b.est_zero());
                    assert_eq!(q.multiplier(b), *a, "({a} / {b}) * {b}");
                }
            }
        }
    }
}

#[test]
fn prop_exemples_pipeline() {
    use super::eval::eval_expression;

    let cas = [
        ("3 + 4", "7"),
        ("1/2 + 1/3", "5/6"),
        ("6 / 3", "2"),
        ("3 + 4 * 2", "11"),
        ("8 - 3 - 2", "3"),
        ("2/4", "1/2"),
        ("10/5 * 3/9", "2/3"),
    ];
    for (entree, attendu) in cas {
        assert_eq!(eval_expression(entree).unwrap().to_string(), attendu, "{entree}");
    }
}
