pub mod card;
pub mod layout;
pub mod service_model;

pub use card::{Card, CardPose, TrailPoint, TRAIL_LENGTH};
pub use layout::Layout;
pub use service_model::{ServiceCatalog, ServiceEntry};
