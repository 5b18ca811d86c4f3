pub mod catalog;
pub mod project;
pub mod site_config;
pub mod skill;
