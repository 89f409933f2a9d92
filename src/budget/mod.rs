pub mod budget;
pub mod chart;
pub mod expense;
pub mod folder;
pub mod normalize;

pub use budget::Budget;
pub use chart::{chart_series, ChartSlice};
pub use expense::ExpenseRecord;
pub use folder::{Folder, DEFAULT_FOLDER_COLOR};
