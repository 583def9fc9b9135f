mod entities;
mod events;
mod results;

pub use entities::{Asset, Entity, Liability, TaxStatus};
pub use events::LifeEvent;
pub use results::{Projection, ProjectionRow, inflation_factor};
