pub mod nominatim;

pub use nominatim::{GeocodeClient, GeocodeError, Place};
