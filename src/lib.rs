//! Relational schema for a meal-planning application: dishes, ingredients,
//! quantities, nutrients, dietary labels, and meal scheduling, declared
//! against diesel. Storage, transactions, and referential enforcement belong
//! to the database this schema is created in; this crate only defines the
//! tables, their row types, and the enumerated integer field used by
//! `quantity_type.kind`.

#[macro_use]
extern crate diesel;

pub mod choices;
pub mod models;
pub mod schema;
