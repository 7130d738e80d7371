pub mod configure;
pub mod generate;
pub mod orchestrate;
pub mod scan;
pub mod selection;
