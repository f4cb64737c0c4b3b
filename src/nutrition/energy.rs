use crate::models::{ActivityLevel, BmrFormula, Goal, Sex};
use crate::nutrition::constants::*;

/// Basal metabolic rate in kcal/day.
///
/// Mifflin-St Jeor: `10W + 6.25H - 5A + (5 | -161)`.
/// Harris-Benedict (Roza & Shizgal revision) uses sex-specific coefficients.
///
/// Inputs are not validated: zero or negative measurements give a
/// meaningless (possibly negative) result rather than an error.
pub fn bmr(formula: BmrFormula, sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let age = f64::from(age);

    match formula {
        BmrFormula::Mifflin => {
            let sex_constant = match sex {
                Sex::Male => MSJ_MALE_CONSTANT,
                Sex::Female => MSJ_FEMALE_CONSTANT,
            };
            MSJ_WEIGHT_COEF * weight_kg + MSJ_HEIGHT_COEF * height_cm + MSJ_AGE_COEF * age
                + sex_constant
        }
        BmrFormula::Harris => match sex {
            Sex::Male => {
                HB_MALE_CONSTANT
                    + HB_MALE_WEIGHT_COEF * weight_kg
                    + HB_MALE_HEIGHT_COEF * height_cm
                    + HB_MALE_AGE_COEF * age
            }
            Sex::Female => {
                HB_FEMALE_CONSTANT
                    + HB_FEMALE_WEIGHT_COEF * weight_kg
                    + HB_FEMALE_HEIGHT_COEF * height_cm
                    + HB_FEMALE_AGE_COEF * age
            }
        },
    }
}

/// Total daily energy expenditure: BMR times the activity factor, rounded.
pub fn tdee(bmr: f64, activity: ActivityLevel) -> i32 {
    (bmr * activity.factor()).round() as i32
}

/// Daily calorie target for a goal.
///
/// The delta may only push the target in the goal's direction: `Lose`
/// clamps it to `<= 0`, `Gain` to `>= 0`, `Maintain` ignores it.
/// The result never drops below [`MIN_CALORIE_TARGET`].
pub fn calorie_target(tdee: i32, goal: Goal, delta_per_day: i32) -> i32 {
    let delta = match goal {
        Goal::Lose => delta_per_day.min(0),
        Goal::Maintain => 0,
        Goal::Gain => delta_per_day.max(0),
    };

    tdee.saturating_add(delta).max(MIN_CALORIE_TARGET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mifflin_male_and_female() {
        // 10*80 + 6.25*180 - 5*30 + 5 = 1780
        let male = bmr(BmrFormula::Mifflin, Sex::Male, 80.0, 180.0, 30);
        assert!((male - 1780.0).abs() < 1e-9);

        // 10*60 + 6.25*165 - 5*25 - 161 = 1345.25
        let female = bmr(BmrFormula::Mifflin, Sex::Female, 60.0, 165.0, 25);
        assert!((female - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn test_harris_benedict() {
        // 88.362 + 13.397*80 + 4.799*180 - 5.677*30 = 1853.632
        let male = bmr(BmrFormula::Harris, Sex::Male, 80.0, 180.0, 30);
        assert!((male - 1853.632).abs() < 1e-6);

        // 447.593 + 9.247*60 + 3.098*165 - 4.330*25 = 1405.333
        let female = bmr(BmrFormula::Harris, Sex::Female, 60.0, 165.0, 25);
        assert!((female - 1405.333).abs() < 1e-6);
    }

    #[test]
    fn test_negative_inputs_do_not_panic() {
        let value = bmr(BmrFormula::Mifflin, Sex::Female, -10.0, 0.0, 40);
        assert!(value < 0.0);
    }

    #[test]
    fn test_tdee_rounds_to_nearest() {
        assert_eq!(tdee(1780.0, ActivityLevel::Sedentary), 2136);
        // 1000 * 1.375 = 1375
        assert_eq!(tdee(1000.0, ActivityLevel::Light), 1375);
        // 1001 * 1.55 = 1551.55
        assert_eq!(tdee(1001.0, ActivityLevel::Moderate), 1552);
    }

    #[test]
    fn test_calorie_target_clamps_delta_by_goal() {
        assert_eq!(calorie_target(2500, Goal::Lose, -500), 2000);
        assert_eq!(calorie_target(2500, Goal::Lose, 300), 2500);
        assert_eq!(calorie_target(2500, Goal::Gain, 300), 2800);
        assert_eq!(calorie_target(2500, Goal::Gain, -300), 2500);
        assert_eq!(calorie_target(2500, Goal::Maintain, -700), 2500);
    }

    #[test]
    fn test_calorie_target_floor() {
        assert_eq!(calorie_target(1500, Goal::Lose, -1000), MIN_CALORIE_TARGET);
        assert_eq!(calorie_target(900, Goal::Maintain, 0), MIN_CALORIE_TARGET);
        assert_eq!(calorie_target(2000, Goal::Lose, i32::MIN), MIN_CALORIE_TARGET);
    }
}
