table! {
    dish (id) {
        id -> Int4,
        name -> Varchar,
        serving_size -> Int4,
        recipe -> Text,
    }
}

table! {
    quantity_type (id) {
        id -> Int4,
        kind -> Integer,
        label -> Varchar,
        factor_from_normal -> Double,
    }
}

table! {
    label (id) {
        id -> Int4,
        name -> Varchar,
    }
}

table! {
    super_sub_label (id) {
        id -> Int4,
        sub_id -> Int4,
        super_id -> Int4,
    }
}

table! {
    ingredient (id) {
        id -> Int4,
        name -> Varchar,
    }
}

table! {
    dish_ingredient (id) {
        id -> Int4,
        dish_id -> Int4,
        ingredient_id -> Int4,
        quantity -> Double,
        quantity_type_id -> Int4,
    }
}

table! {
    ingredient_label (id) {
        id -> Int4,
        ingredient_id -> Int4,
        label_id -> Int4,
    }
}

table! {
    nutrient (id) {
        id -> Int4,
        name -> Varchar,
        daily_value_percent_per_unit -> Double,
    }
}

table! {
    ingredient_nutrient (id) {
        id -> Int4,
        ingredient_id -> Int4,
        nutrient_id -> Int4,
        ingredient_amount -> Double,
        nutrient_amount -> Double,
    }
}

table! {
    meal (id) {
        id -> Int4,
        name -> Varchar,
    }
}

table! {
    dish_meal (id) {
        id -> Int4,
        dish_id -> Int4,
        date -> Date,
        meal_id -> Int4,
    }
}

joinable!(dish_ingredient -> dish (dish_id));
joinable!(dish_ingredient -> ingredient (ingredient_id));
joinable!(dish_ingredient -> quantity_type (quantity_type_id));
joinable!(ingredient_label -> ingredient (ingredient_id));
joinable!(ingredient_label -> label (label_id));
joinable!(ingredient_nutrient -> ingredient (ingredient_id));
joinable!(ingredient_nutrient -> nutrient (nutrient_id));
joinable!(dish_meal -> dish (dish_id));
joinable!(dish_meal -> meal (meal_id));
// super_sub_label carries two references into label, so joins against it are
// spelled out at query time instead of via joinable!.

allow_tables_to_appear_in_same_query!(
    dish,
    quantity_type,
    label,
    super_sub_label,
    ingredient,
    dish_ingredient,
    ingredient_label,
    nutrient,
    ingredient_nutrient,
    meal,
    dish_meal,
);
