// Domain layer: models, the plan catalog and the ports (interfaces) adapters implement.
// No knowledge of DynamoDB or Stripe lives here.

pub mod model;
pub mod plan;
pub mod ports;
