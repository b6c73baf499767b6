pub mod generate;
pub mod lint;
