//! SeaORM adapters. Functions here return `DbErr`; repos translate.

pub mod characters_sea;
pub mod favorites_sea;
pub mod planets_sea;
pub mod users_sea;
