use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod shared;
mod state;
mod utils;
mod viewmodel;

#[cfg(feature = "server")]
mod backend;

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        backend::init_tracing();

        use dotenvy::dotenv;
        dotenv().ok();

        let mut args = std::env::args();
        let _bin = args.next();
        if let Some(cmd) = args.next() {
            if cmd == "check-data" {
                // Fetch the document once and print a per-direction summary.
                let rt = tokio::runtime::Runtime::new().expect("rt");
                rt.block_on(async {
                    match backend::cached_document().await {
                        Ok(Some((fetched_at, doc))) => {
                            for (name, stats) in
                                [("arrivals", &doc.arrivals), ("departures", &doc.departures)]
                            {
                                println!(
                                    "{name}: {} flights/day over {} days, avg delay {}m, on time {}%",
                                    stats.flights_per_day,
                                    stats.days_tracked,
                                    stats.average_delay,
                                    stats.delays.on_time
                                );
                            }
                            println!("fetched at {}", fetched_at.to_rfc3339());
                        }
                        Ok(None) => {
                            eprintln!("check-data: upstream has no document");
                            std::process::exit(1);
                        }
                        Err(e) => {
                            eprintln!("check-data: {e:#}");
                            std::process::exit(1);
                        }
                    }
                });
                return;
            }
        }

        // Warm the document cache at boot so the first page load is served
        // from memory.
        {
            let rt = tokio::runtime::Runtime::new().expect("rt");
            rt.block_on(async {
                match backend::cached_document().await {
                    Ok(Some(_)) => eprintln!("[kv] cache warmed"),
                    Ok(None) => eprintln!("[kv] upstream has no document yet"),
                    Err(e) => eprintln!("[kv] warm-up fetch failed: {e:#}"),
                }
            });
        }
    }
    dioxus::launch(app::App);
}
