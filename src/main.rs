//! Entente -- a seven-power strategy-game simulation environment.
//!
//! This binary runs self-play games with random legal orders: every power
//! draws its orders from the catalog each phase, the adjudicator resolves
//! them, and the per-phase summaries stream to stdout. Useful as a smoke
//! driver and as a demonstration of the environment loop.

use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use entente::board::{Order, Power, ALL_POWERS};
use entente::catalog::random_orders;
use entente::{EnvOptions, Environment};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let games: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(0);

    let mut rng = SmallRng::seed_from_u64(seed);

    for game in 0..games {
        info!(game, "starting self-play game");
        let mut env = Environment::new(EnvOptions::default());
        env.reset();

        while !env.is_game_over() {
            let mut orders: BTreeMap<Power, Vec<Order>> = BTreeMap::new();
            for &power in &ALL_POWERS {
                let picked = random_orders(power, env.state(), &mut rng);
                if !picked.is_empty() {
                    orders.insert(power, picked);
                }
            }

            match env.step(orders, Vec::new()) {
                Ok(result) => println!("{}\n", result.summary),
                Err(e) => {
                    eprintln!("step failed: {}", e);
                    return;
                }
            }
        }

        let result = env.get_episode_result().expect("game is over");
        match result.winner {
            Some(power) => println!(
                "Game over after {} years: {} wins.",
                result.num_years,
                power.display_name()
            ),
            None => println!("Game over after {} years: draw.", result.num_years),
        }
    }
}
