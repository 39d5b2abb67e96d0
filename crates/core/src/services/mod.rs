pub mod aggregation_service;
pub mod budget_service;
pub mod chart_service;
pub mod currency_service;
pub mod format_service;
