//! Easing functions for settle animations

/// Scale of the viscous-fluid curve's input
const VISCOUS_FLUID_SCALE: f32 = 8.0;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    EaseOutQuad,
    EaseOutCubic,
    /// `(t - 1)^5 + 1`: fast start, long soft landing
    #[default]
    EaseOutQuint,
    /// Exponential approach used by platform scrollers
    ViscousFluid,
}

impl Easing {
    /// Look a curve up by its snake_case name, e.g. `"ease_out_quint"`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Easing::Linear),
            "ease_out_quad" => Some(Easing::EaseOutQuad),
            "ease_out_cubic" => Some(Easing::EaseOutCubic),
            "ease_out_quint" => Some(Easing::EaseOutQuint),
            "viscous_fluid" => Some(Easing::ViscousFluid),
            _ => None,
        }
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseOutQuint => {
                let t = t - 1.0;
                t.powi(5) + 1.0
            }
            Easing::ViscousFluid => {
                let normalize = 1.0 / viscous_fluid(1.0);
                let offset = 1.0 - normalize * viscous_fluid(1.0);
                let value = normalize * viscous_fluid(t);
                if value > 0.0 {
                    value + offset
                } else {
                    value
                }
            }
        }
    }
}

fn viscous_fluid(x: f32) -> f32 {
    let x = x * VISCOUS_FLUID_SCALE;
    if x < 1.0 {
        x - (1.0 - (-x).exp())
    } else {
        // 1/e, the value of the first segment at x = 1
        let start = 0.367_879_44;
        let x = 1.0 - (1.0 - x).exp();
        start + x * (1.0 - start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseOutQuad,
        Easing::EaseOutCubic,
        Easing::EaseOutQuint,
        Easing::ViscousFluid,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-5, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut last = easing.apply(0.0);
            for i in 1..=100 {
                let value = easing.apply(i as f32 / 100.0);
                assert!(value >= last - 1e-6, "{easing:?} decreased at step {i}");
                last = value;
            }
        }
    }

    #[test]
    fn test_ease_out_leads_linear() {
        assert!(Easing::EaseOutQuint.apply(0.25) > 0.25);
        assert!(Easing::EaseOutQuint.apply(0.5) > Easing::EaseOutCubic.apply(0.5));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Easing::from_name("viscous_fluid"), Some(Easing::ViscousFluid));
        assert_eq!(Easing::from_name("ease_out_quad"), Some(Easing::EaseOutQuad));
        assert_eq!(Easing::from_name("EaseOutQuint"), None);
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }
}
