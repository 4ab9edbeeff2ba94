//! Store directory generator.
//!
//! The directory is the full cartesian product of cities, channels and
//! fulfillment types. It draws no randomness, so unlike the other
//! generators it takes no seed.

use retail_core::{Channel, City, FulfillmentType, Store};

/// Number of stores in the directory.
pub const STORE_COUNT: usize = City::ALL.len() * Channel::ALL.len() * FulfillmentType::ALL.len();

/// Enumerate stores city-major, channel-minor, fulfillment innermost,
/// numbering them `S001` upwards.
pub fn generate_stores() -> Vec<Store> {
    let mut stores = Vec::with_capacity(STORE_COUNT);
    for city in City::ALL {
        for channel in Channel::ALL {
            for fulfillment_type in FulfillmentType::ALL {
                stores.push(Store {
                    store_id: Store::id_for(stores.len() + 1),
                    city,
                    channel,
                    fulfillment_type,
                });
            }
        }
    }
    stores
}
