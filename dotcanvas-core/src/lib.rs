pub mod canvas;
pub mod dots;
pub mod raster;
pub mod render;
