use axum::{
    Router,
    routing::{get, patch},
};

use std::sync::Arc;

use crate::{accounts, transfers};
use ledger::Ledger;

#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<Ledger>,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/accounts", get(accounts::list).post(accounts::create))
        .route("/accounts/filter/cash/{amount}", get(accounts::filter_by_cash))
        .route("/accounts/{id}", get(accounts::get).delete(accounts::remove))
        .route("/accounts/{id}/credit", patch(accounts::credit))
        .route("/accounts/{id}/deposit", patch(accounts::deposit))
        .route("/accounts/{id}/active", patch(accounts::set_active))
        .route("/accounts/{id}/transact/{to}", patch(transfers::transact))
        .with_state(state)
}

pub async fn run(ledger: Ledger) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(ledger, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    ledger: Ledger,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        ledger: Arc::new(ledger),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    ledger: Ledger,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(ledger, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
