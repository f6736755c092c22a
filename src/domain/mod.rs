pub mod error;
pub mod pointer;
pub mod validation;
