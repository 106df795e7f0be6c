// Command-line front-end
pub mod cli;
