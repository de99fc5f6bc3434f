pub mod use_page_model;
pub mod use_planner;
pub mod use_schedule;
