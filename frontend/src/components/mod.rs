pub mod association_checkbox;
pub mod day_detail_panel;
pub mod header;
pub mod pages;
pub mod schedule_calendar;
