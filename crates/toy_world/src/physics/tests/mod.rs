//! Collision core scenario tests

mod collision_scenarios;
