use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("User {0} already exists")]
    DuplicateUser(String),

    #[error("Unknown post: {0}")]
    UnknownPost(usize),

    #[error("Invalid graph size: {0}, a graph needs at least one vertex")]
    InvalidGraphSize(usize),

    #[error("Invalid edge weight: {0}, weights must be finite and non-negative")]
    InvalidWeight(f64),

    #[error("Vertex index {index} out of range for graph of size {size}")]
    VertexOutOfRange { index: usize, size: usize },

    #[error("Vertex name {name} already registered at index {index}")]
    DuplicateVertex { name: String, index: usize },

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Mismatched input: {0}")]
    MismatchedInput(String),

    #[error("Parse error in line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
