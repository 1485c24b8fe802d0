pub mod generator;
pub mod keywords;
pub mod llm;
pub mod render;
pub mod suffix;
