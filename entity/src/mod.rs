pub mod inspection_checklist;
pub mod inspection_job;
pub mod inspection_report;
pub mod inspection_sub_job;
pub mod tank_details;
