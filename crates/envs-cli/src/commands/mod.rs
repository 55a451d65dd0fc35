pub mod encrypt;
pub mod exec;
pub mod print;
