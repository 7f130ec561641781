//! Single-table key scheme.
//!
//! A customer and all of its subscriptions share the partition
//! `CUSTOMER#<customer_id>`; the sort key tells the rows apart:
//!
//! | row          | partition               | sort                          |
//! |--------------|-------------------------|-------------------------------|
//! | customer     | `CUSTOMER#<customer>`   | `CUSTOMER#<customer>`         |
//! | subscription | `CUSTOMER#<customer>`   | `SUBSCRIPTION#<subscription>` |

use crate::domain::ports::ItemKey;

pub const PARTITION_KEY: &str = "PK";
pub const SORT_KEY: &str = "SK";

const CUSTOMER_PREFIX: &str = "CUSTOMER#";
const SUBSCRIPTION_PREFIX: &str = "SUBSCRIPTION#";

fn customer_partition(customer_id: &str) -> String {
    format!("{}{}", CUSTOMER_PREFIX, customer_id)
}

pub fn customer_key(customer_id: &str) -> ItemKey {
    ItemKey {
        partition: customer_partition(customer_id),
        sort: format!("{}{}", CUSTOMER_PREFIX, customer_id),
    }
}

pub fn subscription_key(customer_id: &str, subscription_id: &str) -> ItemKey {
    ItemKey {
        partition: customer_partition(customer_id),
        sort: format!("{}{}", SUBSCRIPTION_PREFIX, subscription_id),
    }
}
