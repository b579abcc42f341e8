use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::Mutex;

use crate::config::Config;
use crate::constants::DATABASE_NAME;
use crate::errors::{Error, Result};
use crate::transport::{MongoTransport, Transport};

enum State<H> {
    Uninitialized,
    Ready(H),
    Closed,
}

/// Owns the transport and the handle derived from it.
///
/// Build one at startup and share it behind an `Arc`. `connect` and `close`
/// are serialized against each other; `get_handle` only reads cached state.
pub struct ConnectionManager<T: Transport> {
    transport: T,
    state: RwLock<State<T::Handle>>,
    lifecycle: Mutex<()>,
}

impl ConnectionManager<MongoTransport> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(MongoTransport::new(config))
    }
}

impl<T: Transport> ConnectionManager<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: RwLock::new(State::Uninitialized),
            lifecycle: Mutex::new(()),
        }
    }

    pub fn database_name(&self) -> &'static str {
        DATABASE_NAME
    }

    pub fn is_connected(&self) -> bool {
        matches!(*self.read_state(), State::Ready(_))
    }

    pub async fn connect(&self) -> Result<()> {
        let _guard = self.lifecycle.lock().await;

        if self.is_connected() {
            tracing::debug!(database = DATABASE_NAME, "MongoDB already connected");
            return Ok(());
        }

        match self.transport.connect(DATABASE_NAME).await {
            Ok(handle) => {
                *self.write_state() = State::Ready(handle);
                tracing::info!(database = DATABASE_NAME, "Successfully connected to MongoDB.");
                Ok(())
            }
            Err(error) => {
                // A failed reconnect leaves no usable handle behind.
                *self.write_state() = State::Uninitialized;
                tracing::error!(%error, "Error connecting to MongoDB");
                Err(Error::Connect(error))
            }
        }
    }

    pub fn get_handle(&self) -> Result<T::Handle> {
        match &*self.read_state() {
            State::Ready(handle) => Ok(handle.clone()),
            State::Uninitialized => Err(Error::Uninitialized),
            State::Closed => Err(Error::Closed),
        }
    }

    /// Shuts the transport down. Failures are logged, never returned.
    pub async fn close(&self) {
        let _guard = self.lifecycle.lock().await;

        {
            let mut state = self.write_state();
            if matches!(*state, State::Ready(_)) {
                *state = State::Closed;
            }
        }

        match self.transport.close().await {
            Ok(()) => tracing::info!("MongoDB connection closed."),
            Err(error) => tracing::error!(%error, "Error closing MongoDB connection"),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, State<T::Handle>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State<T::Handle>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
