// Entity Models
// All entities are immutable values: built once, compared by value.

pub mod product;
pub mod customer;
pub mod payment;
pub mod subscription;

pub use product::Product;
pub use customer::Customer;
pub use payment::Payment;
pub use subscription::Subscription;
