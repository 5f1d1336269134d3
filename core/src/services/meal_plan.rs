//! Meal plan suggestions and favorites
//!
//! The meal tables are static; suggestions are a uniform random pick per
//! slot so refreshing the plan gives some variety.

use fittrack_shared::{MealGoal, MealPlan};
use rand::seq::SliceRandom;
use rand::Rng;

/// Meal options for one goal, by slot
struct GoalMeals {
    breakfast: &'static [&'static str],
    lunch: &'static [&'static str],
    dinner: &'static [&'static str],
    snacks: &'static [&'static str],
}

const MUSCLE_GAIN: GoalMeals = GoalMeals {
    breakfast: &[
        "Oats with nuts & banana",
        "Paneer paratha with curd",
        "Egg bhurji with roti",
    ],
    lunch: &[
        "Grilled chicken with brown rice",
        "Dal, roti & mixed veggies",
        "Rajma chawal",
    ],
    dinner: &[
        "Fish curry with quinoa",
        "Soybean curry with rice",
        "Grilled tofu with veggies",
    ],
    snacks: &[
        "Protein shake",
        "Greek yogurt with fruits",
        "Handful of almonds & walnuts",
    ],
};

const WEIGHT_LOSS: GoalMeals = GoalMeals {
    breakfast: &[
        "Moong dal chilla",
        "Fruit smoothie",
        "Boiled eggs with green tea",
    ],
    lunch: &[
        "Grilled salmon with salad",
        "Khichdi with curd",
        "Multigrain roti & sabzi",
    ],
    dinner: &[
        "Lentil soup with whole wheat toast",
        "Chicken soup",
        "Vegetable stir fry",
    ],
    snacks: &[
        "Sprouts salad",
        "Fox nuts (Makhana)",
        "Cucumber & carrot sticks",
    ],
};

const MAINTENANCE: GoalMeals = GoalMeals {
    breakfast: &[
        "Poha with peanuts",
        "Ragi dosa",
        "Scrambled eggs with toast",
    ],
    lunch: &[
        "Vegetable biryani",
        "Dal, rice & sabzi",
        "Grilled fish with sweet potatoes",
    ],
    dinner: &[
        "Mixed vegetable soup",
        "Grilled paneer with salad",
        "Stuffed chapati rolls",
    ],
    snacks: &[
        "Roasted chana",
        "Fruit salad",
        "Homemade protein bars",
    ],
};

fn meals_for(goal: MealGoal) -> &'static GoalMeals {
    match goal {
        MealGoal::MuscleGain => &MUSCLE_GAIN,
        MealGoal::WeightLoss => &WEIGHT_LOSS,
        MealGoal::Maintenance => &MAINTENANCE,
    }
}

fn pick(options: &'static [&'static str], rng: &mut impl Rng) -> String {
    options
        .choose(rng)
        .copied()
        .unwrap_or("No meals available")
        .to_string()
}

/// Meal plan service
pub struct MealPlanService;

impl MealPlanService {
    /// Suggest a full day's plan for the goal
    pub fn suggest(goal: MealGoal) -> MealPlan {
        Self::suggest_with_rng(goal, &mut rand::thread_rng())
    }

    /// Suggest with a caller-supplied RNG; lets tests pin the seed
    pub fn suggest_with_rng(goal: MealGoal, rng: &mut impl Rng) -> MealPlan {
        let meals = meals_for(goal);
        MealPlan {
            breakfast: pick(meals.breakfast, rng),
            lunch: pick(meals.lunch, rng),
            dinner: pick(meals.dinner, rng),
            snack: pick(meals.snacks, rng),
        }
    }

    /// Every option for one slot of one goal
    pub fn options(goal: MealGoal, slot: MealSlot) -> &'static [&'static str] {
        let meals = meals_for(goal);
        match slot {
            MealSlot::Breakfast => meals.breakfast,
            MealSlot::Lunch => meals.lunch,
            MealSlot::Dinner => meals.dinner,
            MealSlot::Snack => meals.snacks,
        }
    }
}

/// One meal slot in a day's plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Session-scoped list of saved meals; duplicates are ignored
#[derive(Debug, Default, Clone)]
pub struct Favorites {
    meals: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a meal; returns false if it was blank or already saved
    pub fn add(&mut self, meal: &str) -> bool {
        if meal.is_empty() || self.meals.iter().any(|m| m == meal) {
            return false;
        }
        self.meals.push(meal.to_string());
        true
    }

    pub fn items(&self) -> &[String] {
        &self.meals
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn clear(&mut self) {
        self.meals.clear();
    }
}
