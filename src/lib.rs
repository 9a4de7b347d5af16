pub mod cli;
pub mod io;
pub mod model;
pub mod report;
pub mod tui;
pub mod util;
