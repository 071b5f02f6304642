use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::choices::QuantityKind;
use crate::schema::{
    dish, dish_ingredient, dish_meal, ingredient, ingredient_label, ingredient_nutrient, label,
    meal, nutrient, quantity_type, super_sub_label,
};

#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct Dish {
    pub id: i32,
    pub name: String, // e.g. Sweet Potato Hash
    pub serving_size: i32,
    pub recipe: String,
}

#[derive(Debug, Clone, Insertable)]
#[table_name = "dish"]
pub struct NewDish {
    pub name: String,
    pub serving_size: i32,
    pub recipe: String,
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A unit of measure, e.g. teaspoon. `factor_from_normal` converts from the
/// normal unit (liters, kilograms, or IU) to this unit and must be positive,
/// e.g. 1000.0 for milliliters per liter.
#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct QuantityType {
    pub id: i32,
    pub kind: QuantityKind,
    pub label: String,
    pub factor_from_normal: f64,
}

#[derive(Debug, Clone, Insertable)]
#[table_name = "quantity_type"]
pub struct NewQuantityType {
    pub kind: QuantityKind,
    pub label: String,
    pub factor_from_normal: f64,
}

impl fmt::Display for QuantityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A dietary category, e.g. Paleo or Atkins.
#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct Label {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Insertable)]
#[table_name = "label"]
pub struct NewLabel {
    pub name: String,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Generalization edge between labels: the sub label implies the super label,
/// e.g. sub=Paleo, super=Gluten-Free. The schema does not forbid cycles or
/// self-edges; callers that care should check `is_self_reference` before
/// inserting.
#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct SuperSubLabel {
    pub id: i32,
    pub sub_id: i32,
    pub super_id: i32,
}

#[derive(Debug, Clone, Insertable)]
#[table_name = "super_sub_label"]
pub struct NewSuperSubLabel {
    pub sub_id: i32,
    pub super_id: i32,
}

impl NewSuperSubLabel {
    pub fn is_self_reference(&self) -> bool {
        self.sub_id == self.super_id
    }
}

impl fmt::Display for SuperSubLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "label #{} is label #{}", self.sub_id, self.super_id)
    }
}

#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i32,
    pub name: String, // e.g. extra virgin olive oil
}

#[derive(Debug, Clone, Insertable)]
#[table_name = "ingredient"]
pub struct NewIngredient {
    pub name: String,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// "This dish uses this much of this ingredient in this unit."
#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct DishIngredient {
    pub id: i32,
    pub dish_id: i32,
    pub ingredient_id: i32,
    pub quantity: f64, // e.g. 1.5, invariant > 0
    pub quantity_type_id: i32,
}

#[derive(Debug, Clone, Insertable)]
#[table_name = "dish_ingredient"]
pub struct NewDishIngredient {
    pub dish_id: i32,
    pub ingredient_id: i32,
    pub quantity: f64,
    pub quantity_type_id: i32,
}

impl fmt::Display for DishIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of ingredient #{} in dish #{} (unit #{})",
            self.quantity, self.ingredient_id, self.dish_id, self.quantity_type_id
        )
    }
}

/// "This ingredient satisfies this dietary label."
#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct IngredientLabel {
    pub id: i32,
    pub ingredient_id: i32, // e.g. almond flour
    pub label_id: i32,      // e.g. Paleo
}

#[derive(Debug, Clone, Insertable)]
#[table_name = "ingredient_label"]
pub struct NewIngredientLabel {
    pub ingredient_id: i32,
    pub label_id: i32,
}

impl fmt::Display for IngredientLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ingredient #{} is label #{}", self.ingredient_id, self.label_id)
    }
}

#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct Nutrient {
    pub id: i32,
    pub name: String,
    pub daily_value_percent_per_unit: f64,
}

#[derive(Debug, Clone, Insertable)]
#[table_name = "nutrient"]
pub struct NewNutrient {
    pub name: String,
    pub daily_value_percent_per_unit: f64,
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ratio of nutrient to ingredient, e.g. per 100 g of ingredient, X mg of
/// nutrient.
#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct IngredientNutrient {
    pub id: i32,
    pub ingredient_id: i32,
    pub nutrient_id: i32,
    pub ingredient_amount: f64,
    pub nutrient_amount: f64,
}

#[derive(Debug, Clone, Insertable)]
#[table_name = "ingredient_nutrient"]
pub struct NewIngredientNutrient {
    pub ingredient_id: i32,
    pub nutrient_id: i32,
    pub ingredient_amount: f64,
    pub nutrient_amount: f64,
}

impl fmt::Display for IngredientNutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of ingredient #{} has {} of nutrient #{}",
            self.ingredient_amount, self.ingredient_id, self.nutrient_amount, self.nutrient_id
        )
    }
}

#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct Meal {
    pub id: i32,
    pub name: String, // breakfast, lunch, dinner, snack, etc
}

#[derive(Debug, Clone, Insertable)]
#[table_name = "meal"]
pub struct NewMeal {
    pub name: String,
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// "This dish is scheduled for this meal on this date."
#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct DishMeal {
    pub id: i32,
    pub dish_id: i32,
    pub date: NaiveDate,
    pub meal_id: i32,
}

#[derive(Debug, Clone, Insertable)]
#[table_name = "dish_meal"]
pub struct NewDishMeal {
    pub dish_id: i32,
    pub date: NaiveDate,
    pub meal_id: i32,
}

impl fmt::Display for DishMeal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dish #{} is for meal #{} on {}",
            self.dish_id, self.meal_id, self.date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_entities_display_their_name() {
        let dish = Dish {
            id: 1,
            name: "Sweet Potato Hash".to_string(),
            serving_size: 4,
            recipe: "Dice, toss in oil, roast.".to_string(),
        };
        assert_eq!(dish.to_string(), "Sweet Potato Hash");

        let unit = QuantityType {
            id: 3,
            kind: QuantityKind::Volume,
            label: "tablespoon".to_string(),
            factor_from_normal: 67.628,
        };
        assert_eq!(unit.to_string(), "tablespoon");

        let meal = Meal {
            id: 2,
            name: "breakfast".to_string(),
        };
        assert_eq!(meal.to_string(), "breakfast");
    }

    #[test]
    fn dish_ingredient_summary_includes_all_references() {
        let row = DishIngredient {
            id: 7,
            dish_id: 1,
            ingredient_id: 5,
            quantity: 1.5,
            quantity_type_id: 3,
        };
        assert_eq!(
            row.to_string(),
            "1.5 of ingredient #5 in dish #1 (unit #3)"
        );
    }

    #[test]
    fn ingredient_nutrient_summary_expresses_the_ratio() {
        let row = IngredientNutrient {
            id: 1,
            ingredient_id: 5,
            nutrient_id: 9,
            ingredient_amount: 100.0,
            nutrient_amount: 14.4,
        };
        assert_eq!(
            row.to_string(),
            "100 of ingredient #5 has 14.4 of nutrient #9"
        );
    }

    #[test]
    fn dish_meal_summary_includes_the_date() {
        let row = DishMeal {
            id: 1,
            dish_id: 1,
            date: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
            meal_id: 2,
        };
        assert_eq!(row.to_string(), "dish #1 is for meal #2 on 2026-08-25");
    }

    #[test]
    fn super_sub_self_reference_is_detectable() {
        let edge = NewSuperSubLabel {
            sub_id: 4,
            super_id: 4,
        };
        assert!(edge.is_self_reference());
        let edge = NewSuperSubLabel {
            sub_id: 4,
            super_id: 8,
        };
        assert!(!edge.is_self_reference());
    }

    #[test]
    fn rows_serialize_to_json() {
        let row = Ingredient {
            id: 5,
            name: "extra virgin olive oil".to_string(),
        };
        let json = serde_json::to_string(&row).unwrap();
        let back: Ingredient = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, 5);
        assert_eq!(back.name, "extra virgin olive oil");
    }
}
