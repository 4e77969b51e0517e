mod bottom_bar;
mod central_panel;
mod side_panel;
mod tools_panel;
mod top_bar;

pub use bottom_bar::bottom_bar;
pub use central_panel::central_panel;
pub use side_panel::side_panel;
pub use tools_panel::tools_panel;
pub use top_bar::top_bar;
