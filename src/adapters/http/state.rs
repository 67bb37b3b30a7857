//! Shared application state for HTTP handlers.

use std::sync::Arc;

use crate::ports::{BakedGoodRepository, BakeryRepository};

/// Shared application state containing all handler dependencies.
///
/// The repositories are injected explicitly; no handler reaches for ambient
/// global state.
#[derive(Clone)]
pub struct AppState {
    pub bakeries: Arc<dyn BakeryRepository>,
    pub baked_goods: Arc<dyn BakedGoodRepository>,
}

impl AppState {
    /// Creates a new AppState from the two repository ports.
    pub fn new(
        bakeries: Arc<dyn BakeryRepository>,
        baked_goods: Arc<dyn BakedGoodRepository>,
    ) -> Self {
        Self {
            bakeries,
            baked_goods,
        }
    }
}
