//! Display palette for catalog entries.

use rand::Rng;

/// The fixed color palette new entries draw from.
pub const PALETTE: [&str; 5] = ["#fef3c7", "#fecaca", "#fed7aa", "#bbf7d0", "#fde68a"];

/// Glyph assigned to every newly authored entry.
pub const DEFAULT_ICON: &str = "🍃";

/// Uniform-random palette choice.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PALETTE[rng.random_range(0..PALETTE.len())]
}

#[cfg(test)]
mod tests {
    use super::{random_color, PALETTE};

    #[test]
    fn random_color_always_draws_from_the_palette() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            assert!(PALETTE.contains(&random_color(&mut rng)));
        }
    }
}
