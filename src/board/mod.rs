//! Board representation and game-state types.
//!
//! Contains the core data structures for provinces, adjacency, units,
//! orders, and the overall game state.

pub mod adjacency;
pub mod order;
pub mod province;
pub mod state;
pub mod unit;

pub use adjacency::{adj_from, adjacent, is_adjacent, AdjacencyEntry, ADJACENCIES, ADJACENCY_COUNT};
pub use order::Order;
pub use province::{
    Power, Province, ProvinceInfo, ProvinceType, ALL_POWERS, ALL_PROVINCES, PROVINCE_COUNT,
    PROVINCE_INFO, SUPPLY_CENTER_COUNT,
};
pub use state::{GameState, Message, Phase, PowerState, Season, STARTING_UNITS, VICTORY_CENTERS};
pub use unit::{Unit, UnitType};
