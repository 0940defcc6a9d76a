pub mod llms;
pub mod robots;
pub mod sitemap;
