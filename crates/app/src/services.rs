//! Application services — one use-case struct per aggregate.

pub mod city_service;
pub mod point_of_interest_service;
