pub mod publish;
pub mod style;
