//! Orders: the status lifecycle, the entities, and order assembly.

mod assembly;
mod order;
mod status;

pub use assembly::{assemble_order, CartLine, ProductLookup};
pub use order::{Order, OrderItem, ShippingDetails};
pub use status::OrderStatus;
