// src/noyau/format.rs

/// Affichage d’un résultat double : "10" (pas "10.0"), "1.5", "0" (jamais "-0").
/// Au-delà de 1e21 on passe en notation scientifique plutôt que d’écrire 22+ chiffres.
pub fn format_resultat(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.is_finite() && v.abs() >= 1e21 {
        return format!("{v:e}");
    }
    format!("{v}")
}
