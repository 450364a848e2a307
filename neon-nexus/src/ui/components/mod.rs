pub mod blog;
pub mod contact;
pub mod footer;
pub mod learning;
pub mod metrics;
pub mod nav;
pub mod portfolio;
pub mod testimonials;
pub mod vault;
