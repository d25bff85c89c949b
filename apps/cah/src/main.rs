//! `cah-packs`: load the configured pack catalog and report what a lobby
//! opened from `CAH_ORIGIN` would offer.

use std::process::ExitCode;

use cah::{LobbyConfig, PackCatalog};
use tracing::{error, info};

mod telemetry;

fn main() -> ExitCode {
    telemetry::init_tracing();

    let config = match LobbyConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(code = %e.code(), error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let catalog = match PackCatalog::load(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(code = %e.code(), error = %e, "failed to load pack catalog");
            return ExitCode::FAILURE;
        }
    };

    let origin = std::env::var("CAH_ORIGIN").ok();
    let candidates = catalog.candidates(origin.as_deref());
    info!(
        origin = origin.as_deref().unwrap_or("-"),
        packs = candidates.len(),
        bonus = catalog.bonus().is_some(),
        "candidate packs resolved"
    );

    for (index, pack) in candidates.iter().enumerate() {
        info!(
            index,
            pack = %pack.name,
            black = pack.cards.black.len(),
            white = pack.cards.white.len(),
            selected_by_default = index == 0,
            "pack"
        );
    }

    ExitCode::SUCCESS
}
