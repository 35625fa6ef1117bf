use stockroom_infra::{JsonFileStore, SnapshotStore, StoreConfig};

#[tokio::main]
async fn main() {
    stockroom_observability::init();

    let config = StoreConfig::from_env();
    let store = JsonFileStore::new(&config.data_path);
    if config.seed_demo {
        seed_if_empty(&store);
    }

    let app = stockroom_api::app::build_app(store, config.defaults.clone());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind server address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

fn seed_if_empty(store: &JsonFileStore) {
    match store.load() {
        Ok(snapshot) if snapshot.is_empty() => {
            match store.save(&stockroom_infra::seed::demo_snapshot()) {
                Ok(()) => tracing::info!("seeded demo data"),
                Err(err) => tracing::warn!(%err, "failed to write demo seed"),
            }
        }
        Ok(_) => {}
        Err(err) => tracing::warn!(%err, "could not inspect snapshot for seeding"),
    }
}
