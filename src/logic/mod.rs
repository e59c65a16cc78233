pub mod planner;
pub mod ranking;
