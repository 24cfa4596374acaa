pub mod area_series;
pub mod axis;
pub mod bar_series;
pub mod color;
pub mod layout;
pub mod line_series;
pub mod markings;
pub mod point_series;
pub mod scale;
pub mod series;
pub mod time_ticks;
pub mod types;

pub use area_series::{area_bottom, project_area_polygons};
pub use axis::{Axes, Axis, DataExtent, Tick, TickStep};
pub use bar_series::{bar_extent, clip_bar, project_bars, BarEdges, BarExtent, BarGeometry};
pub use color::Color;
pub use layout::{
    compute_layout, estimate_text_extent, EstimatedTextMeasurer, PlotLayout, TextExtent,
    TextMeasurer,
};
pub use line_series::{clip_segment, project_line_paths};
pub use markings::{collect_markings, resolve_markings, MarkingShape, ResolvedMarking};
pub use point_series::{project_points, PointMarker};
pub use scale::{AxisDirection, AxisTransform};
pub use series::{
    build_datapoints, normalize_series, xy, DatapointBuffer, LabeledSeries, RawPoint, RawValue,
    Series, SeriesExtent, SeriesInput, SlotFormat,
};
pub use time_ticks::format_date;
pub use types::{AxisId, AxisRange, PixelPoint, PlotOffset, Viewport};
