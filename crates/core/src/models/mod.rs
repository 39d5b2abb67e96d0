pub mod amount;
pub mod asset;
pub mod budget;
pub mod category;
pub mod chart;
pub mod currency;
pub mod filter;
pub mod history;
pub mod liability;
pub mod session;
pub mod settings;
pub mod summary;
pub mod view;
