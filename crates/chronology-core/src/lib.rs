// File: crates/chronology-core/src/lib.rs
// Summary: Core library entry point; warp transforms, tick locators, chart model and rendering.

pub mod error;
pub mod transform;
pub mod grid;
pub mod locator;
pub mod formatter;
pub mod scale;
pub mod axis;
pub mod series;
pub mod view;
pub mod types;
pub mod theme;
pub mod text;
pub mod chart;
pub mod region;
pub mod data;
pub mod draw;
pub mod config;
pub mod figure;

pub use error::{ChartError, Result};
pub use transform::{AsinhTransform, CompositeTransform, CoordinateTransform, InvertedAsinhTransform, LinearTransform};
pub use locator::{AsinhLocator, Locator, TickLocator};
pub use formatter::Formatter;
pub use scale::{AsinhScale, AxisDefaults, AxisScale, LinearScale, Scale, Subs, WarpScale};
pub use axis::Axis;
pub use series::{Annotation, Band, Series, SeriesType};
pub use view::ViewState;
pub use theme::{Palette, Theme};
pub use text::TextShaper;
pub use chart::{AnnotationId, Chart, RenderOptions};
pub use region::draw_areas;
pub use data::{load_data, load_dir, load_file, Event, Publication, YearSpec};
pub use draw::{draw, event_to_xy, nudge};
pub use config::ChartConfig;
pub use figure::build_chart;
