//! Graph file I/O for the command-line tool.

pub mod graph_file;

pub use graph_file::GraphFile;
