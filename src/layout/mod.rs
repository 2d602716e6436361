//! # Grid Layout
//!
//! The geometric half of the engine: solving track configurations into
//! pixel lines ([`tracks`]) and converting between grid placements and
//! pixel boxes ([`coords`]).
//!
//! Both are breakpoint-unaware. Resolve a [`Responsive`](crate::responsive::Responsive)
//! value first and pass the result in.

pub mod coords;
pub mod tracks;

pub use coords::{
    col_zone_left, col_zone_width, container_grid_to_pixel, grid_to_pixel, pixel_to_container_grid,
    pixel_to_grid, ContainerPixel, GridPixel, MIN_ELEMENT_SIZE,
};
pub use tracks::{
    resolve_axis, solve_columns, solve_tracks, ComputedGrid, ComputedGrid2D, GridLine, MAX_COLUMNS,
};
