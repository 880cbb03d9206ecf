//! Order resource: delivery orders with a status lifecycle
//!
//! Orders move forward through pending → preparing → out-for-delivery →
//! delivered; delivered is terminal and deletion is only allowed while
//! pending.

pub mod chain;
pub mod handlers;
pub mod model;

pub use chain::{OrderContext, WriteOp};
pub use model::{Order, OrderItem, OrderStatus};
