#![doc = "The `taskdeck` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, validation rules, authentication"]
#![doc = "mechanisms, repository and use-case layers, routing configuration, and error"]
#![doc = "handling for the TaskDeck API. The main binary (`main.rs`) uses it to wire"]
#![doc = "the components together and run the server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod usecase;
