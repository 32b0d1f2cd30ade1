//! Lumen server entry point.

use eyre::WrapErr;
use lumen_server_core::constants::STORE_CONNECT_TIMEOUT;
use lumen_store_redis::StorePool;
use tracing::info;

fn main() -> eyre::Result<()> {
    lumen_server_commands::run(|config| {
        // The store pool is the one external resource established at
        // startup. It is only opened once consolidation has succeeded, with
        // a bounded timeout so an unreachable store fails fast.
        let _store = match &config.store {
            Some(endpoint) => {
                let pool = StorePool::connect(endpoint, STORE_CONNECT_TIMEOUT)
                    .wrap_err("Failed to reach the registration store")?;
                info!("Connected to registration store at {}", pool.endpoint());
                Some(pool)
            }
            None => None,
        };

        // The CoAP/DTLS engine consumes the validated configuration from
        // here on.
        info!(
            "Configuration consolidated; server ready to start on {}",
            config.coap.describe()
        );
        Ok(())
    })
}
