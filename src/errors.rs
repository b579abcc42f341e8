use mongodb::error::Error as MongoError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Connect(#[source] MongoError),

    #[error("Database not initialized. Call connect first.")]
    Uninitialized,

    #[error("Database connection has been closed")]
    Closed,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
