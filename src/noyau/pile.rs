// src/noyau/pile.rs
//
// Exécution d’une RPN : pile d’opérandes f64 (IEEE double), lecture de gauche à droite.
// Le premier dépilé est l’opérande de droite (y), le second celui de gauche (x).

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use super::erreur::Erreur;
use super::format::format_resultat;
use super::jetons::{Operateur, Tok};

/// Évalue une suite postfixe et retourne l’unique valeur restante.
pub fn evaluate_postfix(tokens: Vec<Tok>) -> Result<f64, Erreur> {
    executer(tokens, None)
}

/// Comme `evaluate_postfix`, en notant chaque opération appliquée ("x op y = r").
pub fn evaluate_postfix_trace(tokens: Vec<Tok>, etapes: &mut Vec<String>) -> Result<f64, Erreur> {
    executer(tokens, Some(etapes))
}

fn executer(tokens: Vec<Tok>, mut etapes: Option<&mut Vec<String>>) -> Result<f64, Erreur> {
    let mut st: Vec<f64> = Vec::new();

    for tok in tokens {
        match tok {
            Tok::Num(chiffres) => st.push(lire_nombre(&chiffres)?),

            Tok::Op(op) => {
                let (Some(y), Some(x)) = (st.pop(), st.pop()) else {
                    return Err(Erreur::InvalidExpression);
                };
                let r = appliquer(op, x, y)?;

                if let Some(etapes) = etapes.as_deref_mut() {
                    etapes.push(format!(
                        "{} {} {} = {}",
                        format_resultat(x),
                        op.symbole(),
                        format_resultat(y),
                        format_resultat(r)
                    ));
                }
                st.push(r);
            }

            // une parenthèse n’a rien à faire dans une RPN
            Tok::LPar | Tok::RPar => return Err(Erreur::InvalidExpression),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(Erreur::InvalidExpression),
    }
}

fn appliquer(op: Operateur, x: f64, y: f64) -> Result<f64, Erreur> {
    Ok(match op {
        Operateur::Plus => x + y,
        Operateur::Minus => x - y,
        Operateur::Star => x * y,
        Operateur::Slash => {
            if y == 0.0 {
                return Err(Erreur::ZeroDivision);
            }
            x / y
        }
    })
}

/// Chiffres -> f64 via un entier exact : pas de débordement intermédiaire,
/// un littéral trop grand pour un double donne +inf.
fn lire_nombre(chiffres: &str) -> Result<f64, Erreur> {
    BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .and_then(|n| n.to_f64())
        .ok_or(Erreur::InvalidExpression)
}
