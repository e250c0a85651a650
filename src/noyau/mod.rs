//! Noyau de la calculatrice RPN
//!
//! Organisation interne :
//! - erreur.rs : les trois erreurs (InvalidExpression, IncorrectParens, ZeroDivision)
//! - jetons.rs : tokenisation (alphabet fixe, nombres multi-chiffres)
//! - rpn.rs    : shunting-yard (infixe -> postfixe)
//! - pile.rs   : exécution de la RPN sur une pile de f64
//! - format.rs : affichage d’un résultat
//! - eval.rs   : pipeline complet
//!
//! Tout est pur et synchrone : aucun état global, aucun journal, aucune reprise.

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod pile;
pub mod rpn;

#[cfg(test)]
mod tests_etapes;



// API publique minimale
pub use erreur::Erreur;
pub use eval::{evaluate, evaluate_demarche, Demarche};
pub use format::format_resultat;
pub use jetons::{tokenize, Operateur, Tok};
pub use pile::evaluate_postfix;
pub use rpn::to_postfix;
