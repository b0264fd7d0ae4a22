use crate::metrics::constants::*;
use crate::models::{Goal, UserProfile};

/// BMI bucket shown next to the computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// How alarming a category is, used to color the BMI panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

impl BmiCategory {
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            BmiCategory::Normal => Severity::Success,
            BmiCategory::Underweight | BmiCategory::Overweight => Severity::Warning,
            BmiCategory::Obese => Severity::Danger,
        }
    }
}

/// Round to `decimals` places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Body mass index rounded to one decimal.
///
/// Returns `None` when either input is missing, non-positive or not finite.
pub fn bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let weight = weight_kg.filter(|w| w.is_finite() && *w > 0.0)?;
    let height = height_cm.filter(|h| h.is_finite() && *h > 0.0)?;

    let height_m = height / 100.0;
    Some(round_to(weight / (height_m * height_m), BMI_DECIMALS))
}

/// BMI of the profile's current weight and height.
pub fn bmi_for_profile(profile: &UserProfile) -> Option<f64> {
    bmi(profile.weight_kg, profile.height_cm)
}

pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < BMI_UNDERWEIGHT {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT {
        BmiCategory::Normal
    } else if bmi < BMI_OBESE {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Goal suggested for a BMI. Only a hint; it never changes the chosen goal.
pub fn recommended_goal(bmi: f64) -> Goal {
    if bmi < BMI_UNDERWEIGHT {
        Goal::GainWeight
    } else if bmi >= BMI_OVERWEIGHT {
        Goal::LoseWeight
    } else {
        Goal::Maintain
    }
}

/// Values derived from a profile for display. Computed fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub recommended_goal: Option<Goal>,
}

impl DerivedMetrics {
    pub fn compute(profile: &UserProfile) -> Self {
        let bmi = bmi_for_profile(profile);
        Self {
            bmi,
            bmi_category: bmi.map(bmi_category),
            recommended_goal: bmi.map(recommended_goal),
        }
    }
}
