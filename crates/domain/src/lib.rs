//! # tutorhub-domain
//!
//! Pure domain model for the tutorhub dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Users** and their **Roles** (teacher, student, admin)
//! - Define **Teachers** and the presentational values derived from them
//! - Define **reference data** (subjects, grade levels) and cascade lookups
//! - Define the **service draft** and its validation rules
//! - Define the remaining records (students, availability, cities, contracts,
//!   notifications) and the teacher listing filter
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod id;
pub mod time;

pub mod availability;
pub mod city;
pub mod contract;
pub mod filter;
pub mod notification;
pub mod reference;
pub mod service;
pub mod student;
pub mod teacher;
pub mod user;
