use shared::{Unit, UnitCatalog};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Static unit catalog, loaded once at startup
#[derive(Clone, PartialEq)]
pub struct CatalogState {
    pub units: Vec<Unit>,
    pub categories: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
}

#[hook]
pub fn use_catalog(api_client: &ApiClient) -> CatalogState {
    let catalog = use_state(|| Option::<UnitCatalog>::None);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    {
        let catalog = catalog.clone();
        let loading = loading.clone();
        let error = error.clone();
        let api_client = api_client.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.load_catalog().await {
                    Ok(data) => {
                        log::info!(
                            "Loaded {} units in {} categories",
                            data.units.len(),
                            data.categories.len()
                        );
                        catalog.set(Some(data));
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("Failed to load unit catalog: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    CatalogState {
        units: catalog.as_ref().map(|c| c.units.clone()).unwrap_or_default(),
        categories: catalog
            .as_ref()
            .map(|c| c.categories.clone())
            .unwrap_or_default(),
        loading: *loading,
        error: (*error).clone(),
    }
}
