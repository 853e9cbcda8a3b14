use dioxus::prelude::*;

use crate::shared::types::FlightStatsDto;

/// One round trip for the whole dashboard: the aggregated statistics
/// document for both directions. `Ok(None)` means the upstream store has no
/// document yet; transport/decoding problems surface as a server fn error.
#[server(FlightStats)]
pub async fn flight_stats() -> Result<Option<FlightStatsDto>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        match crate::backend::cached_document().await {
            Ok(Some((fetched_at, document))) => Ok(Some(FlightStatsDto {
                fetched_at: fetched_at.to_rfc3339(),
                document,
            })),
            Ok(None) => Ok(None),
            Err(e) => {
                eprintln!("flight_stats: {e:#}");
                Err(ServerFnError::new("Failed to fetch data"))
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(None)
    }
}
