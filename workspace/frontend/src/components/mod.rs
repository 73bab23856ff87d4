pub mod analytics_chart;
pub mod dashboard;
pub mod feeds;
pub mod hazard_map;
pub mod header;
pub mod login_modal;
pub mod media_preview;
pub mod nav_tabs;
pub mod report_form;
pub mod reports_table;
pub mod submission_indicator;
