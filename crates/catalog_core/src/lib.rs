//! Catalog editor core: edit session state machine, the editor controller that
//! ties it to a record store, and the pure view projection.

pub mod editor;
pub mod ids;
pub mod labels;
pub mod session;
pub mod view;

pub use editor::{CatalogEditor, CatalogStats, Confirm, DeleteOutcome};
pub use ids::{Clock, IdAllocator, SystemClock};
pub use labels::{Labels, Locale};
pub use session::{Draft, EditSession, SessionMode};
pub use view::{format_price, render, render_text, CatalogView, FieldView, FormView, RowView};
