//! Company endpoints: the generic resource surface only.

use axum::Router;

use smartstock_core::traits::Store;
use smartstock_entity::Company;

use crate::handlers::resource::{Resource, resource_routes};
use crate::state::AppState;

impl Resource for Company {
    const PATH: &'static str = "companies";

    fn store(state: &AppState) -> &dyn Store<Self> {
        state.stores.companies.as_ref()
    }
}

/// Company routes.
pub fn routes() -> Router<AppState> {
    resource_routes::<Company>()
}
