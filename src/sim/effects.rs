//! Transient effect bookkeeping (explosions).
//! No gameplay impact; kept only for the renderer.

use super::state::Effect;

/// Age every effect by `dt` and drop the expired ones
pub fn age_effects(effects: &mut Vec<Effect>, dt: f32) {
    for effect in effects.iter_mut() {
        effect.age += dt.max(0.0);
    }
    effects.retain(|e| !e.is_expired());
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_effects_expire() {
        let mut effects = vec![
            Effect::explosion(Vec3::ZERO, 0.6),
            Effect {
                age: 0.4,
                ..Effect::explosion(Vec3::X, 0.6)
            },
        ];
        age_effects(&mut effects, 0.2);
        assert_eq!(effects.len(), 1);
        assert!((effects[0].age - 0.2).abs() < 1e-6);

        age_effects(&mut effects, 0.3);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_negative_dt_never_rewinds() {
        let mut effects = vec![Effect::explosion(Vec3::ZERO, 0.6)];
        age_effects(&mut effects, -1.0);
        assert_eq!(effects[0].age, 0.0);
    }
}
