//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> to_postfix -> evaluate_postfix
//!
//! La première erreur rencontrée est rendue telle quelle ; les étapes suivantes ne tournent pas.

use super::erreur::Erreur;
use super::jetons::{format_tokens, tokenize};
use super::pile::{evaluate_postfix, evaluate_postfix_trace};
use super::rpn::to_postfix;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub etapes: Vec<String>,
}

/// API publique : texte -> valeur (IEEE double) ou erreur classée.
pub fn evaluate(s: &str) -> Result<f64, Erreur> {
    let jetons = tokenize(s)?;
    let rpn = to_postfix(jetons)?;
    evaluate_postfix(rpn)
}

/// Même calcul que `evaluate`, avec la démarche (jetons, RPN, opérations appliquées).
pub fn evaluate_demarche(s: &str) -> Result<(f64, Demarche), Erreur> {
    // 1) Jetons
    let jetons = tokenize(s)?;
    let jetons_txt = format_tokens(&jetons);

    // 2) RPN
    let rpn = to_postfix(jetons)?;
    let rpn_txt = format_tokens(&rpn);

    // 3) Pile
    let mut etapes = Vec::new();
    let v = evaluate_postfix_trace(rpn, &mut etapes)?;

    let d = Demarche {
        jetons: jetons_txt,
        rpn: rpn_txt,
        etapes,
    };

    Ok((v, d))
}
