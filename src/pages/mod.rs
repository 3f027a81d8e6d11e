//! Page modules for route-level views.
//!
//! ARCHITECTURE
//! ============
//! Each page is selected by `RouteOutlet` from the route table. Only the
//! workout player takes input properties (`id`, forwarded from the path).

pub mod blank;
pub mod circuit_list;
pub mod settings;
pub mod workout_player;
