mod options;

pub use options::Cli;
