//! Calculatrice RPN — bibliothèque
//!
//! Le noyau transforme une expression (chiffres, + - * /, parenthèses, espaces)
//! en une valeur double ou une erreur classée. La vue (binaire) n’en est qu’un appelant.

pub mod noyau;

pub use noyau::{evaluate, Erreur};
